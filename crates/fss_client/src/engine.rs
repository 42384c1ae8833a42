use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use fss_core::{Generation, ParseAs, QueryKind};
use fss_logging::fss_debug;

use crate::{ClientEvent, FssClient, Transport};

enum ClientCommand {
    Query {
        generation: Generation,
        cwd: Option<String>,
        kinds: Vec<QueryKind>,
    },
    Download {
        generation: Generation,
        path: String,
        parse_as: Option<ParseAs>,
    },
    WithData {
        generation: Generation,
        parse_as: Option<ParseAs>,
    },
}

/// Runs client requests on a background runtime and reports completions as events.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn spawn<T: Transport + 'static>(client: FssClient<T>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let client = Arc::new(client);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(client.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn query(&self, generation: Generation, cwd: Option<String>, kinds: Vec<QueryKind>) {
        let _ = self.cmd_tx.send(ClientCommand::Query {
            generation,
            cwd,
            kinds,
        });
    }

    pub fn download(
        &self,
        generation: Generation,
        path: impl Into<String>,
        parse_as: Option<ParseAs>,
    ) {
        let _ = self.cmd_tx.send(ClientCommand::Download {
            generation,
            path: path.into(),
            parse_as,
        });
    }

    /// Queries the listing and downloads its root; completes as `DownloadCompleted`.
    pub fn with_data(&self, generation: Generation, parse_as: Option<ParseAs>) {
        let _ = self.cmd_tx.send(ClientCommand::WithData {
            generation,
            parse_as,
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<ClientEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command<T: Transport>(
    client: &FssClient<T>,
    command: ClientCommand,
) -> ClientEvent {
    match command {
        ClientCommand::Query {
            generation,
            cwd,
            kinds,
        } => {
            fss_debug!("query generation={} cwd={:?}", generation, cwd);
            let result = client.query_at(cwd.as_deref(), &kinds).await;
            ClientEvent::QueryCompleted { generation, result }
        }
        ClientCommand::Download {
            generation,
            path,
            parse_as,
        } => {
            fss_debug!("download generation={} path={}", generation, path);
            let result = client.download(&path, parse_as).await;
            ClientEvent::DownloadCompleted { generation, result }
        }
        ClientCommand::WithData {
            generation,
            parse_as,
        } => {
            fss_debug!("with_data generation={}", generation);
            let result = client.with_data(parse_as).await;
            ClientEvent::DownloadCompleted { generation, result }
        }
    }
}
