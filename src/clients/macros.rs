/// Generates async client methods that send a store command and unpack the
/// matching outcome.
///
/// Each `fn snake_name(params) -> T;` line sends `Command::SnakeName { params }`
/// and expects `Outcome::SnakeName(T)` back. Transport failures map to
/// `ActorCommunicationError`, any other outcome to `UnexpectedOutcome`.
macro_rules! store_client_methods {
    ($client:ident, $error:ident, $command:ident => $outcome:ident {
        $(
            $(#[$meta:meta])*
            fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty;
        )*
    }) => {
        paste::paste! {
            impl $client {
                $(
                    $(#[$meta])*
                    #[tracing::instrument(skip(self))]
                    pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error> {
                        tracing::debug!("Sending request");
                        match self.inner.execute($command::[<$method:camel>] { $($param),* }).await {
                            Ok($outcome::[<$method:camel>](value)) => Ok(value),
                            Ok(other) => Err($error::UnexpectedOutcome(format!("{:?}", other))),
                            Err(e) => Err($error::ActorCommunicationError(e.to_string())),
                        }
                    }
                )*
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client:ident, $store:ty) => {
        impl $client {
            pub fn new(inner: crate::actor_framework::StoreClient<$store>) -> Self {
                Self { inner }
            }

            /// Asks the actor to stop after the requests already queued.
            #[tracing::instrument(skip(self))]
            pub async fn shutdown(&self) -> Result<(), crate::actor_framework::FrameworkError> {
                tracing::debug!("Sending shutdown");
                self.inner.shutdown().await
            }
        }
    };
}
