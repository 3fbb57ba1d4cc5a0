pub mod candidate;
pub mod job;

pub use candidate::CandidateRecord;
pub use job::JobPosting;
