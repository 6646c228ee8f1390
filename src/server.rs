use crate::logger::Logger;
use hyper::{
    body::HttpBody,
    service::{make_service_fn, service_fn},
    header::CONTENT_LENGTH,
    Body, Method, Request, Response, StatusCode,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{borrow::Cow, collections::HashMap, convert::Infallible, future::Future, net::SocketAddr, pin::Pin, sync::Arc};

static SPECIAL_CHARACTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\.\+\*\?\^\$\(\)\[\]\{\}\|\\])").expect("Invalid regex"));
static PARAMETER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^\{]*)\}").expect("Invalid regex"));

fn escape_regex(text: &str) -> Cow<'_, str> {
    SPECIAL_CHARACTERS.replace_all(text, |caps: &regex::Captures| format!(r"\{}", &caps[1]))
}

/// A path pattern where `{name}` matches one path segment.
pub struct DynamicUri {
    regex: Regex,
    parameters: HashMap<String, usize>,
}

impl DynamicUri {
    pub fn new(uri: &str) -> Self {
        let mut offset = 0;
        let mut index = 1;
        let mut chunks = Vec::new();
        let mut parameters = HashMap::new();
        for occurence in PARAMETER.find_iter(uri) {
            let range = occurence.range();
            let name = &uri[range.start + 1..range.end - 1];
            assert!(!parameters.contains_key(name), "Duplicate parameter {} in {}", name, uri);
            parameters.insert(name.to_string(), index);
            chunks.push(escape_regex(&uri[offset..range.start]));
            chunks.push(Cow::from("([^/]*)"));
            offset = range.end;
            index += 1;
        }
        chunks.push(escape_regex(&uri[offset..]));
        let regex = Regex::new(&format!("^{}$", chunks.join(""))).expect("Invalid route");
        Self { regex, parameters }
    }

    pub fn check(&self, uri: &str) -> Option<HashMap<String, String>> {
        let captures = self.regex.captures(uri)?;
        let mut parameters = HashMap::new();
        for (name, &index) in &self.parameters {
            parameters.insert(name.clone(), captures[index].to_string());
        }
        Some(parameters)
    }
}

fn parse_query(query: &str, parameters: &mut HashMap<String, String>) {
    for part in query.split('&') {
        let parts: Vec<&str> = part.split('=').collect();
        if parts.len() == 2 {
            parameters.insert(parts[0].to_string(), parts[1].to_string());
        }
    }
}

type BoxedResponseFuture = Pin<Box<dyn Send + Future<Output = Response<Body>>>>;
type BoxedHandler<S> = Box<dyn Fn(HashMap<String, String>, Vec<u8>, Arc<S>) -> BoxedResponseFuture + Send + Sync>;

struct Route<S> {
    method: Method,
    dynamic_uri: DynamicUri,
    handler: BoxedHandler<S>,
}

impl<S> Route<S> {
    fn new(method: Method, uri: &str, handler: BoxedHandler<S>) -> Self {
        Self {
            method,
            dynamic_uri: DynamicUri::new(uri),
            handler,
        }
    }

    fn check(&self, method: &Method, path: &str) -> Option<HashMap<String, String>> {
        if method == self.method {
            self.dynamic_uri.check(path)
        } else {
            None
        }
    }
}

pub struct Router<S> {
    routes: Vec<Route<S>>,
    state: Arc<S>,
    logger: Logger,
    max_body_length: usize,
}

impl<S> Router<S> {
    pub fn new(state: Arc<S>, logger: Logger, max_body_length: usize) -> Self {
        Self {
            routes: Vec::new(),
            state,
            logger,
            max_body_length,
        }
    }

    fn add<H, F>(&mut self, method: Method, uri: &str, handler: H)
    where
        H: 'static + Fn(HashMap<String, String>, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.routes.push(Route::new(
            method,
            uri,
            Box::new(move |parameters, body, state| Box::pin(handler(parameters, body, state))),
        ));
    }

    pub async fn route(&self, request: Request<Body>, body: Vec<u8>) -> Response<Body> {
        for route in &self.routes {
            if let Some(mut parameters) = route.check(request.method(), request.uri().path()) {
                if let Some(query) = request.uri().query() {
                    parse_query(query, &mut parameters);
                }
                return (route.handler)(parameters, body, self.state.clone()).await;
            }
        }
        respond_status(StatusCode::NOT_FOUND, "Not Found")
    }

    /// Reads the body, refusing it as soon as it exceeds the body limit, then
    /// routes the request.
    pub async fn handle(&self, mut request: Request<Body>) -> Response<Body> {
        self.logger.log(format!("{} {}", request.method(), request.uri()));
        match read_body(&mut request, self.max_body_length).await {
            Ok(body) => self.route(request, body).await,
            Err(BodyError::TooLarge) => {
                self.logger.log(format!("Rejected body larger than {} bytes", self.max_body_length));
                respond_status(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large")
            }
            Err(BodyError::Read(error)) => {
                self.logger.log(format!("Could not read body: {}", error));
                respond_status(StatusCode::BAD_REQUEST, "Could not read body")
            }
        }
    }
}

fn respond_status(status: StatusCode, message: &'static str) -> Response<Body> {
    let mut response = Response::new(Body::from(message));
    *response.status_mut() = status;
    response
}

#[derive(Debug)]
enum BodyError {
    TooLarge,
    Read(hyper::Error),
}

fn content_length(request: &Request<Body>) -> Option<usize> {
    request.headers().get(CONTENT_LENGTH)?.to_str().ok()?.parse().ok()
}

async fn read_body(request: &mut Request<Body>, max_length: usize) -> Result<Vec<u8>, BodyError> {
    if content_length(request).map_or(false, |length| length > max_length) {
        return Err(BodyError::TooLarge);
    }
    let mut body: Vec<u8> = Vec::new();
    while let Some(chunk) = request.body_mut().data().await {
        let chunk = chunk.map_err(BodyError::Read)?;
        if body.len() + chunk.len() > max_length {
            return Err(BodyError::TooLarge);
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

pub struct Server<S> {
    router: Router<S>,
}

impl<S: 'static + Send + Sync> Server<S> {
    pub fn new(state: Arc<S>, logger: Logger, max_body_length: usize) -> Self {
        Self {
            router: Router::new(state, logger, max_body_length),
        }
    }

    pub fn get<H, F>(&mut self, uri: &str, handler: H)
    where
        H: 'static + Fn(HashMap<String, String>, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.router.add(Method::GET, uri, handler);
    }

    pub fn post<H, F>(&mut self, uri: &str, handler: H)
    where
        H: 'static + Fn(HashMap<String, String>, Vec<u8>, Arc<S>) -> F + Send + Sync,
        F: 'static + Future<Output = Response<Body>> + Send,
    {
        self.router.add(Method::POST, uri, handler);
    }

    pub async fn handle(&self, request: Request<Body>) -> Response<Body> {
        self.router.handle(request).await
    }

    pub async fn run(self, address: SocketAddr) -> Result<(), hyper::Error> {
        let router = Arc::new(self.router);
        let make_service = make_service_fn(|_| {
            let router = router.clone();
            async {
                Ok::<_, Infallible>(service_fn(move |request: Request<Body>| {
                    let router = router.clone();
                    async move { Ok::<_, Infallible>(router.handle(request).await) }
                }))
            }
        });
        hyper::Server::try_bind(&address)?.serve(make_service).await
    }
}
