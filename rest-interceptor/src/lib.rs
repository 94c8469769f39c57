mod body;
mod configuration;
mod data;
mod error;
mod filter;
mod http_client;
mod interceptor;
mod media_type;
mod mock;
pub mod path_matcher;
mod print_curl;
mod serializer;
mod util;

pub use body::BodyRenderer;
pub use configuration::{
    InterceptorConfiguration, MockConfiguration, MockEntryConfiguration, PrintCurlConfiguration,
};
pub use data::{Headers, RequestData};
pub use error::Error;
pub use filter::RequestFilter;
pub use http_client::{HttpClient, HyperHttpClient};
pub use interceptor::{Interceptor, InterceptorChain, Next};
pub use media_type::MediaType;
pub use mock::{MockEntry, MockInterceptor, MockResponse, MockSubstitutionTable};
pub use path_matcher::PathPattern;
pub use print_curl::{CurlSink, LogSink, PrintCurlInterceptor};
pub use serializer::{CurlSerializer, RenderToken, Separator, DEFAULT_IGNORE_HEADERS};

pub use hyper;
