mod assessment;
mod common;
mod intake;
