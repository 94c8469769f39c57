#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use log::Level;
    use rest_interceptor::{
        hyper::{body, Body, Request, Response, StatusCode},
        CurlSink, Error, HttpClient, InterceptorChain, InterceptorConfiguration, MockEntry,
        MockInterceptor, MockSubstitutionTable, PrintCurlInterceptor, RequestData,
    };
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    #[derive(Debug, Default)]
    struct RecordingSink {
        lines: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl CurlSink for RecordingSink {
        fn emit(&self, _: Level, curl: &str) {
            self.lines.lock().unwrap().push(curl.to_string());
        }
    }

    /// Answers every request with its own body and remembers what it saw.
    #[derive(Debug, Default)]
    struct EchoHttpClient {
        calls: AtomicUsize,
        bodies: Mutex<Vec<Vec<u8>>>,
    }

    impl EchoHttpClient {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HttpClient for EchoHttpClient {
        async fn execute(&self, request: RequestData) -> Result<Response<Body>, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.bodies.lock().unwrap().push(request.body.to_vec());

            Ok(Response::builder()
                .status(202)
                .body(Body::from(request.body))?)
        }
    }

    fn print_chain(http_client: Arc<EchoHttpClient>, sink: Arc<RecordingSink>) -> InterceptorChain {
        let configuration = InterceptorConfiguration::default();

        InterceptorChain::new(http_client).with_interceptor(
            PrintCurlInterceptor::from_configuration(&configuration.print_curl)
                .unwrap()
                .with_sink(sink),
        )
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = body::to_bytes(response.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn get_is_printed_and_forwarded() {
        let http_client = Arc::new(EchoHttpClient::default());
        let sink = Arc::new(RecordingSink::default());
        let chain = print_chain(http_client.clone(), sink.clone());

        let response = chain
            .execute(RequestData::new("GET", "http://h/path?p1=1&p2=2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(http_client.calls(), 1);
        assert_eq!(sink.lines(), vec!["curl -X GET 'http://h/path?p1=1&p2=2'"]);
    }

    #[tokio::test]
    async fn json_post_keeps_its_body_for_the_transport() {
        let http_client = Arc::new(EchoHttpClient::default());
        let sink = Arc::new(RecordingSink::default());
        let chain = print_chain(http_client.clone(), sink.clone());
        let request = Request::builder()
            .method("POST")
            .uri("http://h/path")
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"p1":"v1","p2":"v2"}"#))
            .unwrap();

        let response = chain.send(request).await.unwrap();

        assert_eq!(
            sink.lines(),
            vec![r#"curl -X POST 'http://h/path' -H 'content-type: application/json' -d '{"p1":"v1","p2":"v2"}'"#]
        );
        assert_eq!(body_text(response).await, r#"{"p1":"v1","p2":"v2"}"#);
    }

    #[tokio::test]
    async fn url_encoded_form_round_trips() {
        let http_client = Arc::new(EchoHttpClient::default());
        let sink = Arc::new(RecordingSink::default());
        let chain = print_chain(http_client, sink.clone());
        let request = RequestData::new("POST", "http://h/path")
            .with_header("Content-Type", "application/x-www-form-urlencoded;charset=UTF-8")
            .with_body("p1=v1&p2=v2.1&p2=v2.2");

        chain.execute(request).await.unwrap();

        let line = &sink.lines()[0];
        assert_eq!(
            line,
            "curl -X POST 'http://h/path' -H 'Content-Type: application/x-www-form-urlencoded;charset=UTF-8' \
             --data-urlencode 'p1=\"v1\"' --data-urlencode 'p2=\"v2.1\"' --data-urlencode 'p2=\"v2.2\"'"
        );

        let fields: Vec<(String, String)> = line
            .split("--data-urlencode '")
            .skip(1)
            .map(|unit| {
                let unit = unit.trim_end().trim_end_matches('\'');
                let mut split = unit.splitn(2, '=');
                let key = split.next().unwrap().to_string();
                let value = split.next().unwrap().trim_matches('"').to_string();
                (key, value)
            })
            .collect();
        assert_eq!(
            fields,
            vec![
                ("p1".to_string(), "v1".to_string()),
                ("p2".to_string(), "v2.1".to_string()),
                ("p2".to_string(), "v2.2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn multipart_form_shows_fields_and_boundary() {
        let http_client = Arc::new(EchoHttpClient::default());
        let sink = Arc::new(RecordingSink::default());
        let chain = print_chain(http_client, sink.clone());
        let body = [
            "--Bnd7",
            "Content-Disposition: form-data; name=\"p1\"",
            "Content-Type: text/plain;charset=UTF-8",
            "",
            "v1",
            "--Bnd7",
            "Content-Disposition: form-data; name=\"p2\"",
            "",
            "v2.1",
            "--Bnd7",
            "Content-Disposition: form-data; name=\"p2\"",
            "",
            "v2.2",
            "--Bnd7--",
            "",
        ]
        .join("\r\n");
        let request = RequestData::new("POST", "http://h/path")
            .with_header("Content-Type", "multipart/form-data;charset=UTF-8;boundary=Bnd7")
            .with_body(body);

        chain.execute(request).await.unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "curl -X POST 'http://h/path' -H 'Content-Type: multipart/form-data;charset=UTF-8;boundary=Bnd7' \
                 -F 'p1=\"v1\"' -F 'p2=\"v2.1\"' -F 'p2=\"v2.2\"'"
            ]
        );
    }

    #[tokio::test]
    async fn broken_body_still_reaches_the_transport() {
        let http_client = Arc::new(EchoHttpClient::default());
        let sink = Arc::new(RecordingSink::default());
        let chain = print_chain(http_client.clone(), sink.clone());
        let request = RequestData::new("POST", "http://h/upload")
            .with_header("Content-Type", "multipart/form-data;boundary=b")
            .with_body("--b\r\nContent-Disposition: form-data\r\n\r\nx\r\n--b--\r\n");

        let response = chain.execute(request).await.unwrap();

        assert!(sink.lines().is_empty());
        assert_eq!(http_client.calls(), 1);
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn mock_short_circuits_the_transport() {
        let http_client = Arc::new(EchoHttpClient::default());
        let table = MockSubstitutionTable::new(vec![
            MockEntry::new("/users/*", r#"{"id":1}"#).unwrap(),
            MockEntry::new("/users/**", r#"{"id":2}"#).unwrap(),
        ]);
        let chain =
            InterceptorChain::new(http_client.clone()).with_interceptor(MockInterceptor::new(table));

        let response = chain
            .execute(RequestData::new("GET", "/users/42").with_header("Accept", "application/json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.headers()["content-length"], "8");
        assert_eq!(body_text(response).await, r#"{"id":1}"#);
        assert_eq!(http_client.calls(), 0);

        chain
            .execute(RequestData::new("GET", "/orders/1"))
            .await
            .unwrap();
        assert_eq!(http_client.calls(), 1);
    }

    #[tokio::test]
    async fn chain_from_yaml_prints_then_mocks() {
        let configuration = InterceptorConfiguration::from_yaml_str(
            r#"
print-curl:
  url-wishlist: ["/users/**"]
mock:
  enable: true
  conf:
    - url: /users/*
      body: '{"id":1}'
"#,
        )
        .unwrap();
        let http_client = Arc::new(EchoHttpClient::default());
        let chain = InterceptorChain::from_configuration(&configuration, http_client.clone()).unwrap();

        assert_eq!(chain.interceptors().len(), 2);

        let mocked = chain
            .execute(RequestData::new("GET", "/users/42?verbose=true").with_header("Accept", "application/json"))
            .await
            .unwrap();
        assert_eq!(body_text(mocked).await, r#"{"id":1}"#);

        let forwarded = chain
            .execute(RequestData::new("POST", "/orders").with_body("order"))
            .await
            .unwrap();
        assert_eq!(body_text(forwarded).await, "order");
        assert_eq!(http_client.calls(), 1);
        assert_eq!(*http_client.bodies.lock().unwrap(), vec![b"order".to_vec()]);
    }

    #[tokio::test]
    async fn disabled_features_are_not_registered() {
        let mut configuration = InterceptorConfiguration::default();
        configuration.print_curl.enable = false;
        configuration.mock.add_mock("**", "never");

        let chain =
            InterceptorChain::from_configuration(&configuration, Arc::new(EchoHttpClient::default()))
                .unwrap();

        assert!(chain.interceptors().is_empty());
    }
}
