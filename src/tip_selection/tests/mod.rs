mod common;
mod mcmc;
