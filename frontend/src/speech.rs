//! Thin wrappers over the browser speech APIs. Both degrade to no-ops when
//! the browser does not expose them; nothing here is required for a chat
//! turn to complete.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{SpeechRecognition, SpeechRecognitionEvent, SpeechSynthesisUtterance};

/// Reads `text` aloud when speech synthesis is available.
pub fn speak(text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(synth) = window.speech_synthesis() else {
        return;
    };
    let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(text) else {
        return;
    };
    utterance.set_lang("en-US");
    synth.speak(&utterance);
}

pub fn recognition_available() -> bool {
    SpeechRecognition::new().is_ok()
}

/// Starts one recognition session. The final transcript is delivered to
/// `on_transcript`; `on_end` fires when the session closes, with or without
/// a result. Returns `false` when recognition is unavailable or refused to
/// start, so the caller can leave its listening state untouched.
pub fn start_recognition(
    on_transcript: impl Fn(String) + 'static,
    on_end: impl Fn() + 'static,
) -> bool {
    let Ok(recognition) = SpeechRecognition::new() else {
        return false;
    };
    recognition.set_lang("en-US");
    recognition.set_interim_results(false);
    recognition.set_max_alternatives(1);

    let onresult = Closure::<dyn Fn(SpeechRecognitionEvent)>::new(
        move |event: SpeechRecognitionEvent| {
            let transcript = event
                .results()
                .get(0)
                .and_then(|result| result.get(0))
                .map(|alternative| alternative.transcript());
            if let Some(text) = transcript {
                on_transcript(text);
            }
        },
    );
    recognition.set_onresult(Some(onresult.as_ref().unchecked_ref()));
    onresult.forget();

    let onend = Closure::<dyn Fn()>::new(move || on_end());
    recognition.set_onend(Some(onend.as_ref().unchecked_ref()));
    onend.forget();

    recognition.start().is_ok()
}
