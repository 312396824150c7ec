mod utils;

mod check;
mod help;
mod legacy;
mod self_test;
