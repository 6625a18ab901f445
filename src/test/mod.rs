mod dashboard;
mod normalize;
mod utils;
