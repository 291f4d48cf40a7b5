use dioxus::document;

/// Speaks `text` through the webview's `speechSynthesis`, dropping anything
/// still being read.
pub fn speak(text: &str) {
    let _ = document::eval(&speak_script(text));
}

/// Stops whatever is being read aloud.
pub fn cancel_speech() {
    let _ = document::eval(cancel_script());
}

pub(crate) fn speak_script(text: &str) -> String {
    format!(
        r#"(function() {{
                const synth = window.speechSynthesis;
                if (!synth) {{
                    console.warn("Speech synthesis is not available.");
                    return;
                }}
                synth.cancel();
                const utterance = new SpeechSynthesisUtterance({text:?});
                const voices = synth.getVoices();
                const voice = voices.find((v) => v.lang === "en-US")
                    || voices.find((v) => v.lang && v.lang.startsWith("en-"));
                if (voice) {{
                    utterance.voice = voice;
                }}
                utterance.lang = "en-US";
                utterance.pitch = 1.1;
                utterance.rate = 0.9;
                utterance.volume = 1;
                utterance.onerror = (e) => console.error("Speech synthesis error", e.error);
                synth.speak(utterance);
            }})();"#
    )
}

pub(crate) fn cancel_script() -> &'static str {
    r"(function() {
            if (window.speechSynthesis) {
                window.speechSynthesis.cancel();
            }
        })();"
}
