mod entry;
mod system;

use gnat::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
