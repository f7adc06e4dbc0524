use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use tracing::{debug, warn};

use crate::api::{ApiError, OmdbClient, SearchPage};

/// One fetch issued to the background worker. The id is assigned by the
/// runtime and increases monotonically.
#[derive(Debug, Clone)]
pub struct FetchRequest {
	pub id: u64,
	pub query: String,
	pub page: u32,
}

/// Completed fetch, successful or not, tagged with the originating request.
#[derive(Debug)]
pub struct FetchResponse {
	pub id: u64,
	pub page: u32,
	pub result: Result<SearchPage, ApiError>,
}

/// Spawn the fetch worker thread.
///
/// The worker owns the HTTP client and serializes all requests; it exits when
/// the request sender is dropped or the response receiver goes away.
pub fn spawn(
	client: OmdbClient,
) -> (Sender<FetchRequest>, Receiver<FetchResponse>, JoinHandle<()>) {
	let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
	let (response_tx, response_rx) = mpsc::channel::<FetchResponse>();

	let handle = std::thread::spawn(move || {
		for request in request_rx {
			let FetchRequest { id, query, page } = request;
			let result = client.search(&query, page);
			match &result {
				Ok(fetched) => {
					debug!(id, page, count = fetched.movies.len(), "fetch completed");
				}
				Err(err) => warn!(id, page, %err, "fetch failed"),
			}
			if response_tx.send(FetchResponse { id, page, result }).is_err() {
				break;
			}
		}
	});

	(request_tx, response_rx, handle)
}
