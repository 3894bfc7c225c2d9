use lispy::cmdline;

fn main() {
    pretty_env_logger::init();
    let args = std::env::args().collect();
    if cmdline::launch(args).is_err() {
        std::process::exit(1);
    }
}
