//! Incremental decoder for the `data: <json>`-framed event stream relayed by
//! the proxy.
//!
//! Network chunk boundaries do not line up with event boundaries, so the
//! decoder buffers the unterminated tail of each chunk and re-parses it once
//! the rest arrives. Only a frame that is complete yet still unparseable is
//! dropped.

use serde::Deserialize;

/// One decoded unit of the stream.
#[derive(Clone, Debug, PartialEq)]
pub enum SseEvent {
    /// An incremental text fragment extracted from a delta payload.
    Fragment(String),
    /// The literal `data: [DONE]` terminator.
    Done,
}

/// Wire shape of one streamed completion chunk.
#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Default)]
pub struct SseParser {
    buffer: String,
    done: bool,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one decoded network chunk and returns every event completed by
    /// it. Frames are delimited by a blank line; the trailing partial frame
    /// stays buffered until a later push (or `finish`) completes it.
    pub fn push(&mut self, chunk: &str) -> Vec<SseEvent> {
        if self.done {
            return Vec::new();
        }
        self.buffer.push_str(chunk);

        let mut events = Vec::new();
        while let Some(end) = self.buffer.find("\n\n") {
            let frame: String = self.buffer.drain(..end + 2).collect();
            if let Some(event) = parse_frame(&frame) {
                let terminal = event == SseEvent::Done;
                events.push(event);
                if terminal {
                    self.done = true;
                    self.buffer.clear();
                    break;
                }
            }
        }
        events
    }

    /// Flushes a final frame when the stream ended without a terminating
    /// blank line.
    pub fn finish(&mut self) -> Option<SseEvent> {
        if self.done || self.buffer.trim().is_empty() {
            return None;
        }
        let frame = std::mem::take(&mut self.buffer);
        parse_frame(&frame)
    }
}

fn parse_frame(frame: &str) -> Option<SseEvent> {
    for line in frame.lines() {
        let Some(data) = line.strip_prefix("data:") else {
            // comment or field line, not payload
            continue;
        };
        let data = data.trim();
        if data == "[DONE]" {
            return Some(SseEvent::Done);
        }
        match serde_json::from_str::<StreamChunk>(data) {
            Ok(chunk) => {
                let fragment = chunk
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.delta.content);
                if let Some(text) = fragment {
                    if !text.is_empty() {
                        return Some(SseEvent::Fragment(text));
                    }
                }
            }
            Err(e) => {
                log::warn!("skipping unparseable stream frame: {e}");
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(events: &[SseEvent]) -> String {
        events
            .iter()
            .filter_map(|event| match event {
                SseEvent::Fragment(text) => Some(text.as_str()),
                SseEvent::Done => None,
            })
            .collect()
    }

    #[test]
    fn accumulates_fragments_until_the_sentinel() {
        let mut parser = SseParser::new();
        let events = parser.push(concat!(
            "data: {\"choices\":[{\"delta\":{\"content\":\"Hel\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"lo\"}}]}\n\n",
            "data: [DONE]\n\n",
        ));

        assert_eq!(fragments(&events), "Hello");
        assert_eq!(events.last(), Some(&SseEvent::Done));
    }

    #[test]
    fn buffers_a_frame_split_across_chunk_boundaries() {
        let mut parser = SseParser::new();

        // The JSON payload is cut mid-string by the chunk boundary.
        let first = parser.push("data: {\"choices\":[{\"delta\":{\"content\":\"Hel");
        assert!(first.is_empty());

        let second = parser.push("lo\"}}]}\n\ndata: [DONE]\n\n");
        assert_eq!(
            second,
            vec![SseEvent::Fragment("Hello".to_string()), SseEvent::Done]
        );
    }

    #[test]
    fn one_byte_at_a_time_still_decodes() {
        let stream = "data: {\"choices\":[{\"delta\":{\"content\":\"ok\"}}]}\n\ndata: [DONE]\n\n";
        let mut parser = SseParser::new();
        let mut events = Vec::new();
        for ch in stream.chars() {
            events.extend(parser.push(&ch.to_string()));
        }
        assert_eq!(
            events,
            vec![SseEvent::Fragment("ok".to_string()), SseEvent::Done]
        );
    }

    #[test]
    fn non_data_lines_are_ignored() {
        let mut parser = SseParser::new();
        let events = parser.push(concat!(
            ": keep-alive\n\n",
            "event: message\ndata: {\"choices\":[{\"delta\":{\"content\":\"hi\"}}]}\n\n",
        ));
        assert_eq!(events, vec![SseEvent::Fragment("hi".to_string())]);
    }

    #[test]
    fn complete_but_malformed_payloads_are_skipped() {
        let mut parser = SseParser::new();
        let events = parser.push(concat!(
            "data: {broken json\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"fine\"}}]}\n\n",
        ));
        assert_eq!(events, vec![SseEvent::Fragment("fine".to_string())]);
    }

    #[test]
    fn empty_and_absent_deltas_produce_no_fragment() {
        let mut parser = SseParser::new();
        let events = parser.push(concat!(
            "data: {\"choices\":[{\"delta\":{}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"\"}}]}\n\n",
            "data: {\"choices\":[]}\n\n",
        ));
        assert!(events.is_empty());
    }

    #[test]
    fn nothing_is_decoded_after_the_sentinel() {
        let mut parser = SseParser::new();
        parser.push("data: [DONE]\n\n");
        let events =
            parser.push("data: {\"choices\":[{\"delta\":{\"content\":\"late\"}}]}\n\n");
        assert!(events.is_empty());
        assert_eq!(parser.finish(), None);
    }

    #[test]
    fn finish_flushes_an_unterminated_final_frame() {
        let mut parser = SseParser::new();
        let events = parser.push("data: {\"choices\":[{\"delta\":{\"content\":\"tail\"}}]}");
        assert!(events.is_empty());
        assert_eq!(
            parser.finish(),
            Some(SseEvent::Fragment("tail".to_string()))
        );
    }
}
