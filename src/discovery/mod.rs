// Discovery module: locating price-list files on disk.

pub mod scanner;
pub mod traits;

pub use scanner::DirectoryScanner;
pub use traits::Discovery;
