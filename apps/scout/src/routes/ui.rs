use axum::response::Html;

/// GET /
/// Single-page form: job description in, ranked candidate cards out.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Scout: candidate sourcing</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>
  body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #1f2933; }
  textarea { width: 100%; min-height: 12rem; font: inherit; padding: .5rem; }
  button { padding: .5rem 1.25rem; font: inherit; cursor: pointer; }
  .row { display: flex; gap: 1rem; align-items: center; margin: .75rem 0; }
  .meta { color: #52606d; font-size: .9rem; }
  .card { border: 1px solid #d9e2ec; border-radius: 8px; padding: 1rem; margin: .75rem 0; }
  .score { font-weight: 700; font-size: 1.25rem; float: right; }
  .strong_hire { border-left: 6px solid #2f9e44; }
  .consider { border-left: 6px solid #f08c00; }
  .weak { border-left: 6px solid #e8590c; }
  .no_hire { border-left: 6px solid #c92a2a; }
  code { background: #f0f4f8; padding: 0 .25rem; }
  .error { color: #c92a2a; }
</style>
</head>
<body>
<h1>Scout</h1>
<p class="meta">Paste a job description to classify it, generate X-Ray queries, and rank public profiles.</p>

<form id="search-form">
  <textarea id="job-description" placeholder="Senior DevOps Engineer, San Francisco..."></textarea>
  <div class="row">
    <label for="num">Candidates: <span id="num-value">10</span></label>
    <input id="num" type="range" min="3" max="15" value="10">
    <button type="submit">Find candidates</button>
  </div>
</form>

<div id="status" class="meta"></div>
<div id="analysis"></div>
<div id="results"></div>

<script>
const el = (id) => document.getElementById(id);
const escape = (s) => String(s ?? "").replace(/[&<>"]/g, (c) => ({"&": "&amp;", "<": "&lt;", ">": "&gt;", '"': "&quot;"}[c]));

el("num").addEventListener("input", (e) => { el("num-value").textContent = e.target.value; });

el("search-form").addEventListener("submit", async (e) => {
  e.preventDefault();
  el("status").textContent = "Searching...";
  el("analysis").innerHTML = "";
  el("results").innerHTML = "";

  const response = await fetch("/api/v1/search", {
    method: "POST",
    headers: {"content-type": "application/json"},
    body: JSON.stringify({
      job_description: el("job-description").value,
      num_candidates: Number(el("num").value),
    }),
  });
  const body = await response.json();

  if (!response.ok) {
    el("status").innerHTML = `<span class="error">${escape(body.error?.message ?? response.statusText)}</span>`;
    return;
  }

  const a = body.job_analysis;
  const s = body.performance_summary;
  el("status").textContent =
    `${body.candidates.length} of ${body.total_found} profiles in ${body.elapsed_secs.toFixed(1)}s, ` +
    `${s.success_rate.toFixed(0)}% of queries produced profiles`;
  el("analysis").innerHTML =
    `<p><b>${escape(a.job_family)}</b> / ${escape(a.seniority)} / ${escape(a.industry)}` +
    ` &middot; ${escape(body.hiring_context.role_type)} (${escape(body.hiring_context.role_subtype)})</p>` +
    body.queries.map((q) => `<p class="meta">${escape(q.strategy)}: <code>${escape(q.query)}</code></p>`).join("");

  el("results").innerHTML = body.candidates.map((c) => {
    const ev = c.assessment.evaluation;
    return `<div class="card ${escape(c.recommendation)}">
      <span class="score">${c.fit_score.toFixed(1)}</span>
      <h3><a href="${escape(c.link)}" target="_blank" rel="noopener">${escape(c.name || c.title)}</a></h3>
      <p class="meta">${escape(c.headline)} ${c.company ? "at " + escape(c.company) : ""} ${escape(c.location)}</p>
      <p>${escape(c.assessment.recommendation_label)}${c.assessment.fallback ? " (fallback score)" : ""}</p>
      <p>${escape(ev.rationale)}</p>
      <p class="meta">+ ${ev.strengths.map(escape).join("; ")}<br>- ${ev.weaknesses.map(escape).join("; ")}</p>
    </div>`;
  }).join("");
});
</script>
</body>
</html>
"#;
