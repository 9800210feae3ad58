mod generate;
mod scenarios;
mod solve;

pub use generate::Generate;
pub use scenarios::Scenarios;
pub use solve::Solve;
