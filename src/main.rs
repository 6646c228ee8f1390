use base_transform::{configuration::Configuration, create_server::create_server, executor::Executor, logger::Logger, state::State};
use std::{net::SocketAddr, process, sync::Arc};

fn main() {
    let logger = Logger::new();

    let configuration = match Configuration::from_env() {
        Ok(configuration) => configuration,
        Err(error) => {
            logger.log(error);
            process::exit(1);
        }
    };

    let state = Arc::new(State::new(configuration.max_input_length(), logger));

    let mut executor = Executor::new();

    executor.spawn_runtime(state, move |state| async move {
        let server = create_server(state);
        let address = SocketAddr::new(configuration.host(), configuration.port());
        logger.log(format!("Listening on {}", address));
        server
            .run(address)
            .await
            .map_err(|error| base_transform::error::Error::new(format!("Server error: {}", error)))
    });

    if let Err(error) = executor.join() {
        logger.log(error);
        process::exit(1);
    }
}
