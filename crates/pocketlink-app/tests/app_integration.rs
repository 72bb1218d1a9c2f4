use jiff::{SignedDuration, Timestamp};
use pocketlink_app::{App, AppConfig, AppError};
use pocketlink_core::{ManualClock, MemoryJournal};
use pocketlink_generator::RandomGenerator;
use pocketlink_redirector::Resolution;
use pocketlink_shortener::{ShortenRequest, ShortenerError};
use pocketlink_storage::{Backend, FileBackend, InMemoryBackend, STORE_KEY};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

fn start() -> Timestamp {
    Timestamp::from_millisecond(1_760_871_600_000).unwrap()
}

fn open<B: Backend>(backend: B, clock: &ManualClock) -> App<B, RandomGenerator, ManualClock> {
    App::open(
        backend,
        RandomGenerator::default(),
        clock.clone(),
        Arc::new(MemoryJournal::new()),
        AppConfig::default(),
    )
}

fn scratch_dir() -> PathBuf {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    std::env::temp_dir().join(format!(
        "pocketlink-app-it-{}-{}-{}",
        std::process::id(),
        Timestamp::now().as_nanosecond(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ))
}

#[test]
fn shorten_into_empty_store_with_defaults() {
    let clock = ManualClock::new(start());
    let app = open(InMemoryBackend::new(), &clock);

    let shortened = app
        .shorten(&ShortenRequest::new("https://example.com"))
        .unwrap();

    let code = shortened.record.short_code.as_str();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(shortened.record.long_url, "https://example.com");
    assert_eq!(
        shortened.record.expires_at.as_millisecond(),
        start().as_millisecond() + 1_800_000
    );
    assert_eq!(shortened.short_url, format!("http://localhost:3000/{code}"));
}

#[test]
fn same_custom_code_twice_is_in_use() {
    let clock = ManualClock::new(start());
    let app = open(InMemoryBackend::new(), &clock);
    let request = ShortenRequest::new("https://example.com").with_custom_code("abc");

    app.shorten(&request).unwrap();
    let err = app.shorten(&request).unwrap_err();

    assert!(matches!(
        err,
        AppError::Shorten(ShortenerError::CodeInUse(ref code)) if code == "abc"
    ));
    assert_eq!(app.links().len(), 1);
}

#[test]
fn visiting_after_expiry_reports_expired() {
    let clock = ManualClock::new(start());
    let app = open(InMemoryBackend::new(), &clock);

    let shortened = app
        .shorten(&ShortenRequest::new("https://example.com").with_validity("10"))
        .unwrap();
    let path = format!("/{}", shortened.record.short_code);

    assert!(matches!(app.visit(&path), Resolution::Active(_)));

    clock.advance(SignedDuration::from_mins(10));
    assert!(matches!(app.visit(&path), Resolution::Active(_)));

    clock.advance(SignedDuration::from_millis(1));
    let resolution = app.visit(&path);
    assert!(matches!(resolution, Resolution::Expired(_)));
    assert_eq!(
        resolution.user_message(),
        Some("This short URL has expired.")
    );
}

#[test]
fn links_survive_a_restart() {
    let dir = scratch_dir();
    let clock = ManualClock::new(start());

    {
        let app = open(FileBackend::new(&dir), &clock);
        app.shorten(&ShortenRequest::new("https://one.com").with_custom_code("one"))
            .unwrap();
        app.shorten(&ShortenRequest::new("https://two.com").with_custom_code("two"))
            .unwrap();
    }

    let reopened = open(FileBackend::new(&dir), &clock);
    let codes: Vec<_> = reopened
        .links()
        .iter()
        .map(|r| r.short_code.to_string())
        .collect();
    assert_eq!(codes, vec!["two", "one"]);
    assert_eq!(
        reopened.visit("/one").redirect_target(),
        Some("https://one.com")
    );

    // the reloaded codes are still taken
    let err = reopened
        .shorten(&ShortenRequest::new("https://three.com").with_custom_code("one"))
        .unwrap_err();
    assert!(matches!(err, AppError::Shorten(ShortenerError::CodeInUse(_))));

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn corrupt_blob_starts_empty() {
    let clock = ManualClock::new(start());
    let backend = Arc::new(InMemoryBackend::with_blob(STORE_KEY, b"[{\"oops\"".to_vec()));

    let app = open(backend.clone(), &clock);
    assert!(app.links().is_empty());

    // the next insertion overwrites the corrupt blob
    app.shorten(&ShortenRequest::new("https://example.com"))
        .unwrap();
    let reopened = open(backend, &clock);
    assert_eq!(reopened.links().len(), 1);
}

#[test]
fn reads_blob_in_browser_wire_format() {
    let clock = ManualClock::new(start());
    let blob = format!(
        r#"[{{"longUrl":"https://example.com/a","shortUrl":"k3j9x1","expiresAt":{}}}]"#,
        start().as_millisecond() + 60_000
    );
    let app = open(InMemoryBackend::with_blob(STORE_KEY, blob), &clock);

    assert_eq!(
        app.visit("/k3j9x1").redirect_target(),
        Some("https://example.com/a")
    );
}

#[test]
fn concurrent_writers_cannot_share_a_code() {
    let clock = ManualClock::new(start());
    let app = Arc::new(open(Arc::new(InMemoryBackend::new()), &clock));

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let app = Arc::clone(&app);
                scope.spawn(move || {
                    app.shorten(
                        &ShortenRequest::new(format!("https://example{i}.com"))
                            .with_custom_code("shared"),
                    )
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(app.links().len(), 1);
}

#[test]
fn concurrent_generated_codes_are_unique() {
    let clock = ManualClock::new(start());
    let app = Arc::new(open(InMemoryBackend::new(), &clock));

    std::thread::scope(|scope| {
        for t in 0..4 {
            let app = Arc::clone(&app);
            scope.spawn(move || {
                for i in 0..25 {
                    app.shorten(&ShortenRequest::new(format!("https://example.com/{t}/{i}")))
                        .unwrap();
                }
            });
        }
    });

    let links = app.links();
    assert_eq!(links.len(), 100);
    assert_eq!(links.codes().len(), 100);
}
