mod candidate;

pub use candidate::CandidateAnswer;
