use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::mpsc::{self, UnboundedSender};
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::{Message, futures::WebSocket};
use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;

use crate::domain::events::DashboardEvent;
use crate::domain::logging::{LogComponent, get_logger};

use super::dto::{ClientMessage, decode_event};

/// Push-channel client based on gloo.
///
/// Owns the reconnect policy: the controller only sees `Connected` /
/// `Disconnected` events plus the typed payload events. Outbound messages are
/// queued through an unbounded channel and dropped with a warning while the
/// socket is down.
pub struct DashboardSocket {
    url: String,
    outbound: RefCell<Option<UnboundedSender<String>>>,
}

impl DashboardSocket {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), outbound: RefCell::new(None) }
    }

    /// Send a client message if the channel is up.
    pub fn emit(&self, message: ClientMessage) {
        let wire = message.to_wire();
        match self.outbound.borrow().as_ref() {
            Some(sender) => {
                if sender.unbounded_send(wire).is_err() {
                    get_logger().warn(
                        LogComponent::Infrastructure("Socket"),
                        &format!("⚠️ Dropped outbound {} - channel closing", message.event_name()),
                    );
                }
            }
            None => {
                get_logger().warn(
                    LogComponent::Infrastructure("Socket"),
                    &format!("⚠️ Dropped outbound {} - not connected", message.event_name()),
                );
            }
        }
    }

    /// Start the connection loop in the background. Events are delivered to
    /// `on_event` strictly in arrival order.
    pub fn spawn(self: Rc<Self>, on_event: Rc<dyn Fn(DashboardEvent)>) {
        spawn_local(async move {
            self.run(on_event).await;
        });
    }

    async fn run(self: Rc<Self>, on_event: Rc<dyn Fn(DashboardEvent)>) {
        let mut delay = 1u64;
        loop {
            get_logger().info(
                LogComponent::Infrastructure("Socket"),
                &format!("🔌 Connecting to push channel: {}", self.url),
            );

            match WebSocket::open(&self.url) {
                Ok(ws) => {
                    delay = 1;
                    let (mut sink, mut stream) = ws.split();
                    let (tx, mut rx) = mpsc::unbounded::<String>();
                    *self.outbound.borrow_mut() = Some(tx);

                    get_logger().info(
                        LogComponent::Infrastructure("Socket"),
                        "✅ Push channel connected",
                    );
                    on_event(DashboardEvent::Connected);

                    let write = async {
                        while let Some(text) = rx.next().await {
                            if sink.send(Message::Text(text)).await.is_err() {
                                break;
                            }
                        }
                    };

                    let events = Rc::clone(&on_event);
                    let read = async {
                        while let Some(message) = stream.next().await {
                            match message {
                                Ok(Message::Text(data)) => match decode_event(&data) {
                                    Ok(Some(event)) => events(event),
                                    Ok(None) => {
                                        get_logger().debug(
                                            LogComponent::Infrastructure("Socket"),
                                            "Ignoring unknown push event",
                                        );
                                    }
                                    Err(e) => {
                                        get_logger().error(
                                            LogComponent::Infrastructure("Socket"),
                                            &format!("❌ Failed to parse push frame: {e}"),
                                        );
                                    }
                                },
                                Ok(_) => {
                                    // Ignore binary frames
                                }
                                Err(e) => {
                                    get_logger().error(
                                        LogComponent::Infrastructure("Socket"),
                                        &format!("❌ WebSocket error: {e:?}"),
                                    );
                                    break;
                                }
                            }
                        }
                    };

                    futures::future::select(Box::pin(read), Box::pin(write)).await;

                    self.outbound.borrow_mut().take();
                    on_event(DashboardEvent::Disconnected);
                }
                Err(e) => {
                    get_logger().error(
                        LogComponent::Infrastructure("Socket"),
                        &format!("❌ Connection error: {e:?}"),
                    );
                }
            }

            get_logger().warn(
                LogComponent::Infrastructure("Socket"),
                &format!("🔌 Reconnecting in {delay}s"),
            );
            sleep(Duration::from_secs(delay)).await;
            delay = (delay * 2).min(32);
        }
    }
}
