pub mod app;
pub mod dashboard;
pub mod export;
pub mod lookup;
pub mod market;
pub mod normalize;
pub mod ui;
pub mod utils;

pub use app::App;
pub use dashboard::Dashboard;
