use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context};
use fss_client::{BodyErrorHandler, ClientHandle, ErrorHandler, FssClient};
use fss_core::{update, AppState, MarkerId, Msg, PageState, Positioner};
use fss_logging::{fss_debug, fss_info};
use log::LevelFilter;

use super::config::Config;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui::layout::Document;
use super::ui::positioner::GridPositioner;
use crate::cli::{Cli, Command};

/// Extra time on top of the request timeout before giving up on a reply.
const REPLY_SLACK: Duration = Duration::from_secs(2);

pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    let destination = if config.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    logging::initialize(destination, level);

    let base_url = cli.base_url.clone().unwrap_or_else(|| config.base_url());
    fss_info!("Using FSS endpoint {}", base_url);
    let client = FssClient::from_settings(&base_url, &config.client_settings())
        .with_context(|| format!("cannot use {base_url} as server address"))?;
    let handle = ClientHandle::spawn(client).context("failed to start client runtime")?;
    let mut runner = EffectRunner::new(handle);
    let timeout = config.request_timeout() + REPLY_SLACK;

    match cli.command {
        Command::List { cwd, out } => {
            let mut browser = Browser::new(runner);
            let loaded = browser.open(cwd, timeout)?;
            write_output(out.as_deref(), &browser.document.to_html())?;
            Ok(exit_code(loaded))
        }
        Command::Menu {
            cwd,
            entry,
            header: _,
            out,
        } => {
            let marker = entry.map_or(MarkerId::Header, MarkerId::Entry);
            let mut browser = Browser::new(runner);
            let loaded = browser.open(cwd, timeout)?;
            if loaded {
                browser.hover(marker)?;
            }
            write_output(out.as_deref(), &browser.document.to_html())?;
            Ok(exit_code(loaded))
        }
        Command::Download {
            path,
            parse_as,
            out,
        } => {
            let result = runner
                .fetch_content(Some(path), parse_as, timeout)
                .ok_or_else(|| anyhow!("timed out waiting for the server"))?;
            emit_content(out.as_deref(), result)
        }
        Command::Data { parse_as, out } => {
            let result = runner
                .fetch_content(None, parse_as, timeout)
                .ok_or_else(|| anyhow!("timed out waiting for the server"))?;
            emit_content(out.as_deref(), result)
        }
    }
}

/// Drives the listing page: messages go through `update`, effects to the
/// client, and every dirty state is rendered into the document.
struct Browser {
    state: AppState,
    runner: EffectRunner,
    document: Document,
}

impl Browser {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            document: Document::new(),
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) -> anyhow::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
        if self.state.consume_dirty() {
            super::ui::render::render(&mut self.document, &self.state.view())?;
        }
        Ok(())
    }

    /// Navigates and waits for the page to load or fail; `Ok(true)` when loaded.
    fn open(&mut self, cwd: Option<String>, timeout: Duration) -> anyhow::Result<bool> {
        self.dispatch_msg(Msg::Navigate(cwd))?;
        let deadline = Instant::now() + timeout;
        while matches!(self.state.page(), PageState::Loading) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                bail!("timed out waiting for the server");
            }
            if let Some(msg) = self.runner.next_msg(remaining) {
                self.dispatch_msg(msg)?;
            }
        }
        Ok(matches!(self.state.page(), PageState::Loaded(_)))
    }

    fn hover(&mut self, marker: MarkerId) -> anyhow::Result<()> {
        let PageState::Loaded(view) = self.state.page() else {
            bail!("no listing to hover over");
        };
        let rect = GridPositioner::for_view(view)
            .marker_rect(marker)
            .ok_or_else(|| anyhow!("no hover marker {marker}"))?;
        fss_debug!("Hovering {} at {:?}", marker, rect);
        self.dispatch_msg(Msg::MarkerEntered { marker, rect })
    }
}

fn emit_content(
    out: Option<&Path>,
    result: Result<fss_client::Downloaded, fss_client::ClientError>,
) -> anyhow::Result<ExitCode> {
    match result {
        Ok(content) => {
            write_output(out, &content.to_string())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let mut document = Document::new();
            BodyErrorHandler::new(&mut document.body).handle(&err);
            write_output(out, &document.to_html())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn write_output(out: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn exit_code(loaded: bool) -> ExitCode {
    if loaded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fss_client::ClientSettings;
    use fss_core::Element;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const WAIT: Duration = Duration::from_secs(5);

    fn browser_for(server: &MockServer) -> Browser {
        let base = format!("{}/fss/browser/", server.uri());
        let client = FssClient::from_settings(&base, &ClientSettings::default()).unwrap();
        Browser::new(EffectRunner::new(ClientHandle::spawn(client).unwrap()))
    }

    async fn mount_listing(server: &MockServer) {
        Mock::given(method("GET"))
            .and(query_param("cwd", "/srv"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cwd": "/srv",
                "list": {"root": "/srv", "paths": ["a b.txt", "music"]},
                "plugins": [{"name": "Gallery", "directory": "fss/gallery"}]
            })))
            .mount(server)
            .await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn open_renders_listing_into_container() {
        let server = MockServer::start().await;
        mount_listing(&server).await;

        let mut browser = browser_for(&server);
        let (loaded, browser) = tokio::task::spawn_blocking(move || {
            let loaded = browser.open(Some("/srv".to_string()), WAIT).unwrap();
            (loaded, browser)
        })
        .await
        .unwrap();

        assert!(loaded);
        let html = browser.document.to_html();
        assert!(html.contains(r#"<div id="container"><h1>"#));
        assert!(html.contains(r#"<a href="?cwd=/srv/a%20b.txt">a b.txt</a>"#));
        assert!(html.contains(r#"<a href="?cwd=/srv/music">music</a>"#));
        assert_eq!(browser.document.plugin_container.style("display"), Some("none"));
        assert_eq!(browser.document.title, "fss: /srv/");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failed_query_replaces_body_with_error_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let mut browser = browser_for(&server);
        let (loaded, browser) = tokio::task::spawn_blocking(move || {
            let loaded = browser.open(None, WAIT).unwrap();
            (loaded, browser)
        })
        .await
        .unwrap();

        assert!(!loaded);
        assert!(browser.document.body.inner_html().contains("<h1>Not Found</h1>"));
        let html = browser.document.to_html();
        assert!(!html.contains(r#"id="container""#));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn hovering_an_entry_shows_plugin_menu() {
        let server = MockServer::start().await;
        mount_listing(&server).await;

        let mut browser = browser_for(&server);
        let browser = tokio::task::spawn_blocking(move || {
            assert!(browser.open(Some("/srv".to_string()), WAIT).unwrap());
            browser.hover(MarkerId::Entry(0)).unwrap();
            browser
        })
        .await
        .unwrap();

        let menu = &browser.document.plugin_container;
        assert_eq!(menu.style("display"), Some("block"));
        assert!(menu
            .inner_html()
            .contains(r#"<a href="/fss/gallery?cwd=/srv/a%20b.txt">Gallery</a>"#));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn hovering_unknown_entry_is_an_error_and_keeps_state() {
        let server = MockServer::start().await;
        mount_listing(&server).await;

        let mut browser = browser_for(&server);
        let browser = tokio::task::spawn_blocking(move || {
            assert!(browser.open(Some("/srv".to_string()), WAIT).unwrap());
            assert!(browser.hover(MarkerId::Entry(9)).is_err());
            browser
        })
        .await
        .unwrap();

        assert!(matches!(browser.state.page(), PageState::Loaded(_)));
        assert_eq!(browser.document.plugin_container.style("display"), Some("none"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_command_exits_non_zero_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let temp = TempDir::new().unwrap();
        let out = temp.path().join("page.html");
        let cli = Cli {
            config: Some(temp.path().join("absent.toml")),
            base_url: Some(format!("{}/fss/browser/", server.uri())),
            verbose: false,
            command: Command::List {
                cwd: None,
                out: Some(out.clone()),
            },
        };

        let code = tokio::task::spawn_blocking(move || run_app(cli).unwrap())
            .await
            .unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        let page = fs::read_to_string(&out).unwrap();
        assert!(page.contains("<h1>Internal Server Error</h1>"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn menu_command_writes_document_with_open_menu() {
        let server = MockServer::start().await;
        mount_listing(&server).await;

        let temp = TempDir::new().unwrap();
        let out = temp.path().join("menu.html");
        let cli = Cli {
            config: Some(temp.path().join("absent.toml")),
            base_url: Some(format!("{}/fss/browser/", server.uri())),
            verbose: false,
            command: Command::Menu {
                cwd: Some("/srv".to_string()),
                entry: Some(1),
                header: false,
                out: Some(out.clone()),
            },
        };

        let code = tokio::task::spawn_blocking(move || run_app(cli).unwrap())
            .await
            .unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        let page = fs::read_to_string(&out).unwrap();
        assert!(page.contains(r#"id="plugin_container" style="display: block; "#));
        assert!(page.contains(r#"href="/fss/gallery?cwd=/srv/music""#));
    }
}
