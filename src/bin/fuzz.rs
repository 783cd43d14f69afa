use std::path::PathBuf;

use html_index::fsutils::{normalize, relative_link};
use html_index::render::{encode_uri, escape_html};
use html_index::title::label_from_filename;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

const ALPHABET: &[char] = &[
    'a', 'B', '0', ' ', '-', '_', '.', '&', '<', '>', '"', '\'', '/', '%', '#', 'é', '문',
];

fn rand_string(rng: &mut dyn RngCore) -> String {
    let len = rng.next_u64() % 12;
    (0..len)
        .map(|_| ALPHABET[(rng.next_u64() % ALPHABET.len() as u64) as usize])
        .collect()
}

fn rand_dir(rng: &mut StdRng) -> PathBuf {
    let mut path = PathBuf::from("/");
    for _ in 0..rng.gen_range(0..4) {
        path.push(["w", "docs", "site", "a"][rng.gen_range(0..4)]);
    }
    path
}

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn run(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let s = rand_string(&mut rng);

    let escaped = escape_html(&s);
    assert!(!escaped.contains(['<', '>', '"', '\'']), "{escaped:?}");
    assert_eq!(unescape(&escaped), s);

    let encoded = encode_uri(&s);
    assert!(encoded.is_ascii() && !encoded.contains([' ', '"', '<', '>', '#', '?']), "{encoded:?}");
    assert_eq!(encoded.matches('/').count(), s.matches('/').count());

    let file = format!("{}.html", s.replace('/', ""));
    let label = label_from_filename(&file);
    assert!(!label.contains(['-', '_', '.']), "{file:?} => {label:?}");

    let from = rand_dir(&mut rng);
    let to = rand_dir(&mut rng).join("page.html");
    let link = relative_link(&from, &to);
    assert_eq!(normalize(&from.join(&link)), to, "{from:?} -> {to:?} = {link}");
}

fn main() {
    println!("running fuzz testing");
    for i in 1..64200 {
        run(i);
    }
    println!("completed!")
}
