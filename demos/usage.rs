use timeskew::{FixSettings, SettingsLocation};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional: surface the apply/restore log lines
    let _ = tracing_subscriber::fmt().try_init();

    // Honors TIMESKEW_OFFSET_SECONDS / TIMESKEW_AUTO_APPLY / TIMESKEW_CLIENT_LABEL;
    // defaults to a 5s backward shift applied globally.
    let settings = FixSettings::load(SettingsLocation::Env).await?;
    let handle = timeskew::apply(settings);

    // An exchange client wired to read through timeskew::unix_millis() now
    // stamps its signed requests a few seconds in the past.
    println!("true now:    {}", jiff::Timestamp::now());
    println!("shifted now: {}", timeskew::now());

    handle.restore();
    println!("restored:    {}", timeskew::now());
    Ok(())
}
