use matchday_refresh::config::AppConfig;
use matchday_refresh::update;

fn main() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = AppConfig::from_env();
    match update::run_update(&config) {
        Ok(count) => println!("[INFO] page updated with {count} matches"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
