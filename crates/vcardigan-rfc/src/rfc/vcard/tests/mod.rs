mod fixtures;
mod scenarios;
