mod issue;
mod result;

pub use issue::Epic;
pub use issue::Issue;
pub use result::Result;
