use anyhow::Result;
use std::thread;
use std::time::Duration;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

use crate::dictionary::{load_dictionary, KeywordDictionary};
use crate::lsp::backend::Backend;
use crate::Config;

/// Start the LSP server
pub async fn serve() -> Result<()> {
    let config = Config::from_args_and_env()?;
    config.init_logging();

    // Without a dictionary every section is unknown, so nothing gets checked
    let (dictionary, startup_error) = match load_dictionary(&config) {
        Ok(dictionary) => (dictionary, None),
        Err(e) => {
            log::error!("Failed to load keyword dictionary: {:#}", e);
            (KeywordDictionary::new(), Some(format!("{:#}", e)))
        }
    };

    // Under the integration tests, exit shortly so the test can read stdout to EOF
    if std::env::var("SIF_LS_TEST_EXIT").as_deref() == Ok("1") {
        thread::spawn(|| {
            thread::sleep(Duration::from_secs(1));
            std::process::exit(0);
        });
    }

    let (service, socket) =
        LspService::build(move |client| Backend::new(client, config, dictionary, startup_error))
            .finish();

    Server::new(stdin(), stdout(), socket).serve(service).await;

    Ok(())
}
