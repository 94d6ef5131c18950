//! Non-interactive mode that loads pages and prints them.

use std::io::{self, Write};

use taplist::TaplistConfig;
use taplist::catalog::{Beer, CatalogError, CatalogGateway, HttpCatalogGateway, PerPage};
use taplist::listing::{FetchOutcome, ListState, PaginatedListController};
use taplist::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};

/// Loads up to `pages` pages and writes one line per beer to stdout.
///
/// # Errors
///
/// Returns an error if the gateway cannot be built, any page fails to load,
/// or stdout cannot be written.
pub async fn run(config: &TaplistConfig, pages: u32) -> Result<(), CatalogError> {
    let gateway = HttpCatalogGateway::new(config.base_url(), config.request_timeout())?;
    let sink: Box<dyn TelemetrySink> = if config.telemetry {
        Box::new(StderrJsonlTelemetrySink)
    } else {
        Box::new(NoopTelemetrySink)
    };

    let state = load_pages(&gateway, config.per_page()?, pages, sink.as_ref()).await?;

    let mut stdout = io::stdout().lock();
    write_catalog_summary(&mut stdout, &state)
}

/// Initializes the list and loads more until `pages` pages are loaded or the
/// catalog is exhausted.
///
/// # Errors
///
/// Returns the first fetch error.
pub async fn load_pages<G>(
    gateway: &G,
    per_page: PerPage,
    pages: u32,
    sink: &dyn TelemetrySink,
) -> Result<ListState, CatalogError>
where
    G: CatalogGateway + ?Sized,
{
    let mut controller = PaginatedListController::new(gateway, per_page).with_telemetry(sink);

    if let FetchOutcome::Failed { error, .. } = controller.initialize().await {
        return Err(error);
    }

    let mut loaded = 1_u32;
    while loaded < pages {
        match controller.load_more().await {
            None => break,
            Some(FetchOutcome::Failed { error, .. }) => return Err(error),
            Some(_) => loaded = loaded.saturating_add(1),
        }
    }

    tracing::info!(
        pages = loaded,
        items = controller.state().item_count(),
        exhausted = controller.state().is_exhausted(),
        "catalog pages loaded"
    );
    Ok(controller.into_state())
}

/// Writes one line per loaded beer followed by a total line.
///
/// Each line is `<id>\t<name>`. When the beer carries a tagline or a first
/// brew date, both follow as two more columns, empty where absent.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the writer fails.
pub fn write_catalog_summary<W: Write>(
    writer: &mut W,
    state: &ListState,
) -> Result<(), CatalogError> {
    for beer in state.items() {
        write_beer_line(writer, beer)?;
    }
    let suffix = if state.is_exhausted() {
        " (end of catalogue)"
    } else {
        ""
    };
    writeln!(
        writer,
        "Total: {} beers across {} page(s){suffix}",
        state.item_count(),
        state.page()
    )?;
    Ok(())
}

fn write_beer_line<W: Write>(writer: &mut W, beer: &Beer) -> Result<(), CatalogError> {
    write!(writer, "{}\t{}", beer.id, beer.name)?;
    if beer.tagline.is_some() || beer.first_brewed.is_some() {
        write!(
            writer,
            "\t{}\t{}",
            beer.tagline.as_deref().unwrap_or_default(),
            beer.first_brewed.as_deref().unwrap_or_default()
        )?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn page_body(first_id: u64, count: u64) -> Value {
        let beers: Vec<Value> = (first_id..first_id.saturating_add(count))
            .map(|id| json!({ "id": id, "name": format!("Beer {id}") }))
            .collect();
        Value::Array(beers)
    }

    async fn mount_page(server: &MockServer, page: &str, body: Value) {
        Mock::given(method("GET"))
            .and(query_param("page", page))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn gateway_for(server: &MockServer) -> HttpCatalogGateway {
        HttpCatalogGateway::new(&server.uri(), std::time::Duration::from_secs(5))
            .expect("gateway should build")
    }

    fn per_page(value: u8) -> PerPage {
        PerPage::new(value).expect("valid page size")
    }

    #[rstest]
    #[tokio::test]
    async fn loads_the_requested_number_of_pages() {
        let server = MockServer::start().await;
        mount_page(&server, "1", page_body(1, 2)).await;
        mount_page(&server, "2", page_body(3, 2)).await;
        mount_page(&server, "3", page_body(5, 2)).await;
        let gateway = gateway_for(&server);

        let state = load_pages(&gateway, per_page(2), 2, &NoopTelemetrySink)
            .await
            .expect("pages should load");

        assert_eq!(state.item_count(), 4);
        assert_eq!(state.page().value(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn stops_at_a_short_page() {
        let server = MockServer::start().await;
        mount_page(&server, "1", page_body(1, 2)).await;
        mount_page(&server, "2", page_body(3, 1)).await;
        let gateway = gateway_for(&server);

        let state = load_pages(&gateway, per_page(2), 5, &NoopTelemetrySink)
            .await
            .expect("pages should load");

        assert_eq!(state.item_count(), 3);
        assert!(state.is_exhausted());
    }

    #[rstest]
    #[tokio::test]
    async fn surfaces_a_failed_page() {
        let server = MockServer::start().await;
        mount_page(&server, "1", page_body(1, 2)).await;
        Mock::given(method("GET"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let gateway = gateway_for(&server);

        let error = load_pages(&gateway, per_page(2), 3, &NoopTelemetrySink)
            .await
            .expect_err("second page should fail");

        assert_eq!(error.status(), Some(500));
    }

    #[rstest]
    #[tokio::test]
    async fn summary_lists_each_beer_and_a_total() {
        let server = MockServer::start().await;
        mount_page(&server, "1", page_body(1, 2)).await;
        mount_page(&server, "2", page_body(3, 1)).await;
        let gateway = gateway_for(&server);
        let state = load_pages(&gateway, per_page(2), 2, &NoopTelemetrySink)
            .await
            .expect("pages should load");
        let mut output = Vec::new();

        write_catalog_summary(&mut output, &state).expect("write should succeed");

        let text = String::from_utf8(output).expect("utf8 output");
        assert_eq!(
            text,
            "1\tBeer 1\n2\tBeer 2\n3\tBeer 3\nTotal: 3 beers across 2 page(s) (end of catalogue)\n"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn summary_includes_tagline_and_first_brew_date() {
        let server = MockServer::start().await;
        let body = json!([
            {
                "id": 1,
                "name": "Buzz",
                "tagline": "A Real Bitter Experience.",
                "first_brewed": "09/2007"
            },
            { "id": 2, "name": "Trashy Blonde", "first_brewed": "04/2008" }
        ]);
        mount_page(&server, "1", body).await;
        let gateway = gateway_for(&server);
        let state = load_pages(&gateway, per_page(10), 1, &NoopTelemetrySink)
            .await
            .expect("page should load");
        let mut output = Vec::new();

        write_catalog_summary(&mut output, &state).expect("write should succeed");

        let text = String::from_utf8(output).expect("utf8 output");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines.first().copied(),
            Some("1\tBuzz\tA Real Bitter Experience.\t09/2007")
        );
        assert_eq!(lines.get(1).copied(), Some("2\tTrashy Blonde\t\t04/2008"));
    }
}
