use chrono::{DateTime, Utc};
use metrics::counter;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Cloneable handle that services use to emit events.
///
/// Sending never blocks request handling beyond channel backpressure; the
/// receiving side runs in a dedicated task spawned at startup.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

// Events emitted by the marketplace as records change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    // User events
    UserSignedIn(String),

    // Catalog events
    CategoryCreated(i32),
    ProviderCreated(i32),
    ProviderUpdated(i32),
    ServiceCreated(i32),
    ServiceUpdated(i32),
    ProductCreated(i32),
    ProductUpdated(i32),

    // Booking events
    BookingCreated(i32),
    BookingStatusChanged {
        booking_id: i32,
        old_status: String,
        new_status: String,
    },

    // Furniture order events
    FurnitureOrderCreated(i32),
    FurnitureOrderStatusChanged {
        order_id: i32,
        old_status: String,
        new_status: String,
    },

    // Review events
    ReviewCreated {
        review_id: i32,
        provider_id: i32,
    },

    // Estimate events
    EstimateCreated(i32),

    // Generic event for custom messages
    Generic {
        message: String,
        timestamp: DateTime<Utc>,
        metadata: serde_json::Value,
    },
}

impl Event {
    /// Create a generic event with string data
    pub fn with_data(data: String) -> Self {
        Event::Generic {
            message: data,
            timestamp: Utc::now(),
            metadata: serde_json::Value::Null,
        }
    }
}

// Drains the event channel and dispatches each event to its handler.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) {
    info!("Starting event processing loop");

    while let Some(event) = rx.recv().await {
        match event {
            Event::BookingCreated(booking_id) => {
                counter!("events.bookings_created", 1);
                handle_booking_created(booking_id).await;
            }
            Event::BookingStatusChanged {
                booking_id,
                old_status,
                new_status,
            } => {
                counter!("events.booking_status_changes", 1);
                info!(
                    "Booking {} moved from {} to {}",
                    booking_id, old_status, new_status
                );
            }
            Event::FurnitureOrderCreated(order_id) => {
                counter!("events.furniture_orders_created", 1);
                handle_furniture_order_created(order_id).await;
            }
            Event::FurnitureOrderStatusChanged {
                order_id,
                old_status,
                new_status,
            } => {
                counter!("events.furniture_order_status_changes", 1);
                info!(
                    "Furniture order {} moved from {} to {}",
                    order_id, old_status, new_status
                );
            }
            Event::ReviewCreated {
                review_id,
                provider_id,
            } => {
                counter!("events.reviews_created", 1);
                info!(
                    "Review {} recorded for provider {}",
                    review_id, provider_id
                );
            }
            Event::EstimateCreated(estimate_id) => {
                counter!("events.estimates_created", 1);
                info!("Cost estimate {} saved", estimate_id);
            }
            Event::UserSignedIn(user_id) => {
                info!("User {} signed in", user_id);
            }
            other => {
                info!("Received event: {:?}", other);
            }
        }
    }

    warn!("Event processing loop has ended");
}

// Handler functions for specific events
async fn handle_booking_created(booking_id: i32) {
    // Booking confirmations would notify the provider here; for now the
    // event trail is the integration point.
    info!("Processing booking created event for booking {}", booking_id);
}

async fn handle_furniture_order_created(order_id: i32) {
    info!(
        "Processing furniture order created event for order {}",
        order_id
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sender_delivers_to_receiver() {
        let (tx, mut rx) = mpsc::channel(8);
        let sender = EventSender::new(tx);

        sender.send(Event::BookingCreated(42)).await.unwrap();

        match rx.recv().await {
            Some(Event::BookingCreated(id)) => assert_eq!(id, 42),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn send_fails_after_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sender = EventSender::new(tx);

        assert!(sender.send(Event::EstimateCreated(1)).await.is_err());
    }

    #[test]
    fn generic_event_carries_message() {
        match Event::with_data("hello".to_string()) {
            Event::Generic { message, .. } => assert_eq!(message, "hello"),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
