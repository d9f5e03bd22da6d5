use std::sync::Arc;

use crate::{
    interfaces::gateway::Gateway,
    rpc::{
        methods::{v1, v09},
        registry::HandlerKind,
    },
};

pub trait ApiHandler: Send + Sync + 'static {
    const KIND: HandlerKind;

    fn from_gateway(gateway: Gateway) -> Self
    where
        Self: Sized;

    fn into_handler(self: Arc<Self>) -> Handler;

    fn from_handler(handler: &Handler) -> Option<Arc<Self>>
    where
        Self: Sized;
}

macro_rules! handlers {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum Handler {
            $($variant(Arc<$ty>),)+
        }

        impl Handler {
            #[must_use]
            pub fn kind(&self) -> HandlerKind {
                match self {
                    $(Self::$variant(_) => HandlerKind::$variant,)+
                }
            }

            #[must_use]
            pub fn ptr_eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $((Self::$variant(left), Self::$variant(right)) => Arc::ptr_eq(left, right),)+
                    _ => false,
                }
            }
        }

        $(
            impl ApiHandler for $ty {
                const KIND: HandlerKind = HandlerKind::$variant;

                fn from_gateway(gateway: Gateway) -> Self {
                    <$ty>::new(gateway)
                }

                fn into_handler(self: Arc<Self>) -> Handler {
                    Handler::$variant(self)
                }

                fn from_handler(handler: &Handler) -> Option<Arc<Self>> {
                    match handler {
                        Handler::$variant(inner) => Some(Arc::clone(inner)),
                        _ => None,
                    }
                }
            }
        )+
    };
}

handlers! {
    Authentication => v1::Authentication,
    Users => v1::Users,
    Groups => v1::Groups,
    Application => v1::Application,
    Account => v1::Account,
    Admin => v1::Admin,
    V09Authorization => v09::Authorization,
    V09ElastiCubes => v09::ElastiCubes,
    V09Branding => v09::Branding,
    V09Reporting => v09::Reporting,
    V09Palettes => v09::Palettes,
    V09Users => v09::Users,
    V09Groups => v09::Groups,
    V09Settings => v09::Settings,
    V09Roles => v09::Roles,
    V09DataSources => v09::DataSources,
    V09Geo => v09::Geo,
}

impl Handler {
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    #[must_use]
    pub fn downcast<T: ApiHandler>(&self) -> Option<Arc<T>> {
        T::from_handler(self)
    }
}
