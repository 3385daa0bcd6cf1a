use std::fs;
use std::io;
use std::sync::{Arc, Mutex};

use octoview::app::{App, octoview_home};
use octoview::infra::credentials::FileCredentialStore;
use octoview::infra::transport::ReqwestTransport;

#[tokio::main]
async fn main() -> io::Result<()> {
    let home = octoview_home();
    fs::create_dir_all(&home)?;

    // Log to a file; stdout belongs to the TUI.
    let log_file = fs::File::create(home.join("octoview.log"))?;
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();

    let credentials = Arc::new(FileCredentialStore::new(home.join("credentials.json")));
    let transport = Arc::new(ReqwestTransport::new());
    let mut app = App::new(credentials, transport);

    octoview::runtime::run(&mut app).await
}
