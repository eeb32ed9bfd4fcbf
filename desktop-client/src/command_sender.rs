use common::games::frog_catch::FrogCatchCommand;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<FrogCatchCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<FrogCatchCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, cmd: FrogCatchCommand) {
        let _ = self.tx.send(cmd);
    }
}
