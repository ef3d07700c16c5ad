pub mod candidate;
pub mod election;
pub mod region;
pub mod scenario;
pub mod tally;
pub mod validator;
pub mod voter;
