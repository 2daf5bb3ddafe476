pub mod explodes;
pub mod subparser;
