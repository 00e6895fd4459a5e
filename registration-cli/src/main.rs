mod app;
mod config;
mod logger;

use app::App;

fn main() {
    if let Err(err) = App::run() {
        eprint!("{}", err);
        std::process::exit(1);
    }
}
