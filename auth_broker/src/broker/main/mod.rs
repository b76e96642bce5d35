mod lifecycle;

pub use lifecycle::AuthenticationBroker;
