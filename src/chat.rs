//! Chat bridge - forwards support chat visibility to whoever hosts the widget

use tokio::sync::mpsc;

use crate::collaborators::ChatWidget;

pub struct ChatBridge {
    visibility_tx: mpsc::UnboundedSender<bool>,
}

impl ChatBridge {
    /// Create the bridge and the receiver the widget host listens on
    pub fn new() -> (Self, mpsc::UnboundedReceiver<bool>) {
        let (visibility_tx, visibility_rx) = mpsc::unbounded_channel();
        (ChatBridge { visibility_tx }, visibility_rx)
    }
}

impl ChatWidget for ChatBridge {
    fn set_chat_visibility(&self, visible: bool) {
        if self.visibility_tx.send(visible).is_err() {
            tracing::debug!(visible, "Chat widget host is gone");
        }
    }
}
