use crate::{
    alphabet::{predefined, Alphabet},
    codec,
    error::Error,
    server::Server,
    state::State,
    transform,
};
use hyper::{
    header::{HeaderValue, CONTENT_TYPE},
    Body, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use std::{collections::HashMap, str, sync::Arc};

#[derive(Debug, Deserialize)]
struct EncodeRequest {
    charset: String,
    data: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct DecodeRequest {
    charset: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct TransformRequest {
    from: usize,
    to: usize,
    digits: Vec<u8>,
}

fn parse_alphabet(parameters: &HashMap<String, String>) -> Result<(&str, &'static Alphabet), Error> {
    let name = parameters
        .get("alphabet")
        .ok_or_else(|| Error::new("Missing alphabet parameter"))?;
    match predefined::by_name(name) {
        Some(alphabet) => Ok((name.as_str(), alphabet)),
        None => Err(Error::new(format!(r#"Unknown alphabet "{}""#, name))),
    }
}

fn parse_text(body: &[u8]) -> Result<&str, Error> {
    str::from_utf8(body).map_err(|_| Error::new("Invalid utf8 body"))
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|error| Error::new(format!("Invalid JSON body: {}", error)))
}

/// JSON spends at most six bytes per input byte (`"\u001f"` escapes, `"255,"`
/// array items), plus room for the charset and the envelope.
fn max_body_length(max_input_length: usize) -> usize {
    max_input_length.saturating_mul(6).saturating_add(4096)
}

fn check_length(length: usize, max_input_length: usize) -> Result<(), Error> {
    if length > max_input_length {
        return Err(Error::new(format!(
            "Input of length {} exceeds the maximum of {}",
            length, max_input_length
        )));
    }
    Ok(())
}

fn list_alphabets() -> Value {
    Value::Object(
        predefined::all()
            .iter()
            .map(|(name, alphabet)| (name.to_string(), json!(alphabet.symbols().iter().collect::<String>())))
            .collect(),
    )
}

fn encode_named(parameters: &HashMap<String, String>, body: &[u8], max_input_length: usize) -> Result<Value, Error> {
    let (name, alphabet) = parse_alphabet(parameters)?;
    check_length(body.len(), max_input_length)?;
    Ok(json!({"alphabet": name, "encoded": codec::encode(body, alphabet)}))
}

fn decode_named(parameters: &HashMap<String, String>, body: &[u8], max_input_length: usize) -> Result<Value, Error> {
    let (name, alphabet) = parse_alphabet(parameters)?;
    check_length(body.len(), max_input_length)?;
    let data = codec::decode(parse_text(body)?, alphabet)?;
    Ok(json!({"alphabet": name, "data": data}))
}

fn encode_custom(body: &[u8], max_input_length: usize) -> Result<Value, Error> {
    let request: EncodeRequest = parse_json(body)?;
    check_length(request.data.len(), max_input_length)?;
    let alphabet = Alphabet::new_unique(&request.charset)?;
    Ok(json!({"encoded": codec::encode(&request.data, &alphabet)}))
}

fn decode_custom(body: &[u8], max_input_length: usize) -> Result<Value, Error> {
    let request: DecodeRequest = parse_json(body)?;
    check_length(request.text.len(), max_input_length)?;
    let alphabet = Alphabet::new_unique(&request.charset)?;
    let data = codec::decode(&request.text, &alphabet)?;
    Ok(json!({ "data": data }))
}

fn transform_digits(body: &[u8], max_input_length: usize) -> Result<Value, Error> {
    let request: TransformRequest = parse_json(body)?;
    check_length(request.digits.len(), max_input_length)?;
    let digits = transform::transform(&request.digits, request.from, request.to)?;
    Ok(json!({ "digits": digits }))
}

fn respond(status: StatusCode, value: Value) -> Response<Body> {
    let mut response = Response::new(Body::from(value.to_string()));
    *response.status_mut() = status;
    response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn respond_result(state: &State, result: Result<Value, Error>) -> Response<Body> {
    match result {
        Ok(value) => respond(StatusCode::OK, value),
        Err(error) => {
            state.logger().log(format!("Rejected request: {}", error));
            respond(StatusCode::BAD_REQUEST, json!({"message": error.message()}))
        }
    }
}

pub fn create_server(state: Arc<State>) -> Server<State> {
    let logger = *state.logger();
    let body_limit = max_body_length(state.max_input_length());
    let mut server = Server::new(state, logger, body_limit);

    server.get("/alphabets", |_parameters, _body, _state| async move { respond(StatusCode::OK, list_alphabets()) });

    server.post("/alphabets/{alphabet}/encode", |parameters, body, state| async move {
        respond_result(&state, encode_named(&parameters, &body, state.max_input_length()))
    });

    server.post("/alphabets/{alphabet}/decode", |parameters, body, state| async move {
        respond_result(&state, decode_named(&parameters, &body, state.max_input_length()))
    });

    server.post("/encode", |_parameters, body, state| async move {
        respond_result(&state, encode_custom(&body, state.max_input_length()))
    });

    server.post("/decode", |_parameters, body, state| async move {
        respond_result(&state, decode_custom(&body, state.max_input_length()))
    });

    server.post("/transform", |_parameters, body, state| async move {
        respond_result(&state, transform_digits(&body, state.max_input_length()))
    });

    server
}
