pub mod new_subscriber;
pub mod subscribed_channel;
pub mod subscriber;
pub mod subscriber_id;
pub mod subscriber_name;

pub use new_subscriber::{NewSubscriber, NewSubscriberBody};
pub use subscribed_channel::SubscribedChannel;
pub use subscriber::{Subscriber, SubscriberSummary};
pub use subscriber_id::SubscriberId;
pub use subscriber_name::SubscriberName;
