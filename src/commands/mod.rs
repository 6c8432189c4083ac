pub mod branches;
pub mod diff;
pub mod history;
pub mod status;
pub mod ui;

pub use branches::*;
pub use diff::*;
pub use history::*;
pub use status::*;
pub use ui::*;
