use std::sync::Arc;

use crate::adapters::{MkvmergeExecAdapter, MkvmergeProbeAdapter, Settings};
use crate::app::remux_interactor::RemuxInteractor;
use crate::ports::{ProbePort, RemuxPort};

pub trait AppContainer: Send + Sync {
    fn remux_interactor(&self) -> Arc<RemuxInteractor>;
}

pub struct DefaultAppContainer {
    remux_interactor: Arc<RemuxInteractor>,
}

impl DefaultAppContainer {
    /// Wire the mkvmerge adapters, both running the configured remuxer binary
    pub fn new(settings: &Settings) -> Self {
        let probe_port = Arc::new(MkvmergeProbeAdapter::new(settings.remuxer.clone()));
        let remux_port = Arc::new(MkvmergeExecAdapter::new(settings.remuxer.clone()));

        let remux_interactor = Arc::new(RemuxInteractor::new(
            probe_port as Arc<dyn ProbePort>,
            remux_port as Arc<dyn RemuxPort>,
        ));

        Self { remux_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn remux_interactor(&self) -> Arc<RemuxInteractor> {
        Arc::clone(&self.remux_interactor)
    }
}
