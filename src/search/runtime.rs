use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;

use super::worker::{FetchRequest, FetchResponse};

/// Handle to the background fetch worker.
///
/// Each issued request receives a fresh id; [`FetchRuntime::matches_latest`]
/// lets the caller drop responses that a later request has superseded. The
/// in-flight HTTP call itself is never cancelled, only ignored when it lands.
pub struct FetchRuntime {
	requests: Option<Sender<FetchRequest>>,
	responses: Receiver<FetchResponse>,
	handle: Option<JoinHandle<()>>,
	latest_id: u64,
	in_flight: bool,
}

impl FetchRuntime {
	/// Wrap an already-spawned worker.
	pub fn new(
		requests: Sender<FetchRequest>,
		responses: Receiver<FetchResponse>,
		handle: Option<JoinHandle<()>>,
	) -> Self {
		Self {
			requests: Some(requests),
			responses,
			handle,
			latest_id: 0,
			in_flight: false,
		}
	}

	/// Send a fetch for `query`/`page`, superseding any earlier request.
	pub fn issue(&mut self, query: String, page: u32) {
		self.latest_id += 1;
		self.in_flight = true;
		let request = FetchRequest {
			id: self.latest_id,
			query,
			page,
		};
		if let Some(requests) = &self.requests {
			// A send failure means the worker is gone; the pump surfaces
			// that as a disconnected receiver.
			let _ = requests.send(request);
		}
	}

	/// Poll for a completed fetch without blocking.
	pub fn try_recv(&self) -> Result<FetchResponse, TryRecvError> {
		self.responses.try_recv()
	}

	/// Whether `id` belongs to the most recently issued request.
	#[must_use]
	pub fn matches_latest(&self, id: u64) -> bool {
		id == self.latest_id
	}

	/// Whether the most recent request has not yet completed.
	#[must_use]
	pub fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	/// Mark the most recent request as completed.
	pub fn mark_settled(&mut self) {
		self.in_flight = false;
	}

	/// Drop the request channel and join the worker thread.
	pub fn shutdown(&mut self) {
		self.requests.take();
		if let Some(handle) = self.handle.take() {
			let _ = handle.join();
		}
	}
}

impl Drop for FetchRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}
