use std::time::{Duration, Instant};

use fss_client::{ClientError, ClientEvent, ClientHandle, Downloaded};
use fss_core::{Effect, Failure, Generation, Msg, ParseAs};
use fss_logging::{fss_info, fss_warn};

/// Executes effects on the client and turns its completions back into messages.
pub struct EffectRunner {
    client: ClientHandle,
    downloads: Generation,
}

impl EffectRunner {
    pub fn new(client: ClientHandle) -> Self {
        Self {
            client,
            downloads: 0,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::IssueQuery {
                    generation,
                    cwd,
                    kinds,
                } => {
                    fss_info!(
                        "IssueQuery generation={} cwd={:?} kinds={:?}",
                        generation,
                        cwd,
                        kinds
                    );
                    self.client.query(generation, cwd, kinds);
                }
            }
        }
    }

    /// Waits up to `timeout` for the next query completion.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        match self.client.recv_timeout(timeout)? {
            ClientEvent::QueryCompleted { generation, result } => Some(Msg::QueryLoaded {
                generation,
                result: result.map_err(|err| Failure::from_error(&err)),
            }),
            ClientEvent::DownloadCompleted { generation, .. } => {
                fss_warn!("Ignoring download completion {} outside a download", generation);
                Some(Msg::NoOp)
            }
        }
    }

    /// Downloads `path`, or the listing root when `None`, and waits for the result.
    pub fn fetch_content(
        &mut self,
        path: Option<String>,
        parse_as: Option<ParseAs>,
        timeout: Duration,
    ) -> Option<Result<Downloaded, ClientError>> {
        self.downloads += 1;
        let expected = self.downloads;
        match path {
            Some(path) => self.client.download(expected, path, parse_as),
            None => self.client.with_data(expected, parse_as),
        }
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.client.recv_timeout(remaining)? {
                ClientEvent::DownloadCompleted { generation, result } if generation == expected => {
                    return Some(result)
                }
                other => fss_warn!("Ignoring unexpected client event {:?}", other),
            }
        }
    }
}
