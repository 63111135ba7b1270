//! Output document DTOs.

use serde::Serialize;

use crate::planner::{Itinerary, Segment};
use crate::query::{Answer, RequestId, Response};

/// Message sent for any unknown bus, unknown stop or unreachable route.
pub const NOT_FOUND: &str = "not found";

/// One response object of the output array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseDto {
    Bus {
        request_id: RequestId,
        stop_count: usize,
        unique_stop_count: usize,
        route_length: u64,
        /// `null` when the route has no geographic length
        curvature: Option<f64>,
    },
    Stop {
        request_id: RequestId,
        buses: Vec<String>,
    },
    Route {
        request_id: RequestId,
        total_time: f64,
        items: Vec<ItemDto>,
    },
    NotFound {
        request_id: RequestId,
        error_message: &'static str,
    },
}

/// An itinerary item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ItemDto {
    Wait { stop_name: String, time: f64 },
    Bus { bus: String, span_count: usize, time: f64 },
}

impl From<&Segment> for ItemDto {
    fn from(segment: &Segment) -> Self {
        match segment {
            Segment::Wait { stop, duration } => ItemDto::Wait {
                stop_name: stop.clone(),
                time: *duration,
            },
            Segment::Ride {
                bus,
                span_count,
                duration,
            } => ItemDto::Bus {
                bus: bus.clone(),
                span_count: *span_count,
                time: *duration,
            },
        }
    }
}

impl ResponseDto {
    fn route(request_id: RequestId, itinerary: &Itinerary) -> Self {
        ResponseDto::Route {
            request_id,
            total_time: itinerary.total_time,
            items: itinerary.segments.iter().map(ItemDto::from).collect(),
        }
    }
}

impl From<&Response> for ResponseDto {
    fn from(response: &Response) -> Self {
        let request_id = response.request_id;
        match &response.answer {
            Answer::Bus(metrics) => ResponseDto::Bus {
                request_id,
                stop_count: metrics.stop_count,
                unique_stop_count: metrics.unique_stop_count,
                route_length: metrics.route_length,
                curvature: metrics.curvature,
            },
            Answer::Stop(buses) => ResponseDto::Stop {
                request_id,
                buses: buses.clone(),
            },
            Answer::Route(itinerary) => ResponseDto::route(request_id, itinerary),
            Answer::NotFound => ResponseDto::NotFound {
                request_id,
                error_message: NOT_FOUND,
            },
        }
    }
}
