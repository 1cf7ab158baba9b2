use clap::Parser;
use geoclick::app::{AppError, GeoclickApp};

fn main() -> Result<(), AppError> {
    env_logger::init();
    let args = GeoclickApp::parse();
    args.op.run()
}
