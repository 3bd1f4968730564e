#![no_main]

use std::collections::HashMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use radix_router::Router;

const METHODS: [&str; 4] = ["GET", "POST", "PUT", "PATCH"];
const WORDS: [&str; 8] = ["a", "ab", "abc", "pet", "pets", "find", "findByStatus", ""];

#[derive(Arbitrary, Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum PatternSeg {
    Word(u8),
    Param,
}

#[derive(Arbitrary, Debug, Clone, Copy)]
enum RequestSeg {
    Word(u8),
    Number(u16),
}

#[derive(Arbitrary, Debug)]
enum RouterMethod {
    Register { method: u8, segs: Vec<PatternSeg> },
    Dispatch { method: u8, segs: Vec<RequestSeg> },
}

fn method(m: u8) -> &'static str {
    METHODS[m as usize % METHODS.len()]
}

fn word(w: u8) -> &'static str {
    WORDS[w as usize % WORDS.len()]
}

/// Folds equivalent spellings together; `/` is a single empty component.
fn normalize(segs: &[PatternSeg]) -> Vec<PatternSeg> {
    let segs: Vec<PatternSeg> = segs
        .iter()
        .take(6)
        .map(|s| match s {
            PatternSeg::Word(w) => PatternSeg::Word(*w % WORDS.len() as u8),
            PatternSeg::Param => PatternSeg::Param,
        })
        .collect();
    if segs.is_empty() {
        vec![PatternSeg::Word(WORDS.len() as u8 - 1)]
    } else {
        segs
    }
}

fn pattern_path(segs: &[PatternSeg]) -> String {
    let mut path = String::new();
    for (i, seg) in segs.iter().enumerate() {
        path.push('/');
        match seg {
            PatternSeg::Word(w) => path.push_str(word(*w)),
            // Names depend only on position, so two routes never disagree on a name.
            PatternSeg::Param => path.push_str(&format!(":p{}", i)),
        }
    }
    path
}

/// Bindings `pattern` produces for `components`, if it matches them.
fn model_match(pattern: &[PatternSeg], components: &[&str]) -> Option<Vec<(String, String)>> {
    if pattern.len() != components.len() {
        return None;
    }
    let mut bindings = Vec::new();
    for (i, (seg, comp)) in pattern.iter().zip(components).enumerate() {
        match seg {
            PatternSeg::Word(w) if word(*w) == *comp => {}
            PatternSeg::Word(_) => return None,
            PatternSeg::Param if comp.is_empty() => return None,
            PatternSeg::Param => bindings.push((format!("p{}", i), comp.to_string())),
        }
    }
    Some(bindings)
}

fuzz_target!(|methods: Vec<RouterMethod>| {
    let mut router = Router::new();
    let mut model: HashMap<(&'static str, Vec<PatternSeg>), usize> = HashMap::new();

    for m in methods.iter().take(512) {
        match m {
            RouterMethod::Register { method: mth, segs } => {
                let segs = normalize(segs);
                let mth = method(*mth);
                let path = pattern_path(&segs);
                let id = model.len();
                let result = router.route(mth, &path, id);
                let model_key = (mth, segs);
                if model.contains_key(&model_key) {
                    assert!(result.is_err(), "duplicate {} {} accepted", mth, path);
                } else {
                    assert!(result.is_ok(), "{} {} rejected: {:?}", mth, path, result);
                    model.insert(model_key, id);
                }
            }
            RouterMethod::Dispatch { method: mth, segs } => {
                let mth = method(*mth);
                let values: Vec<String> = segs
                    .iter()
                    .take(6)
                    .map(|s| match s {
                        RequestSeg::Word(w) => word(*w).to_string(),
                        RequestSeg::Number(n) => n.to_string(),
                    })
                    .collect();
                let path = if values.is_empty() {
                    "/".to_string()
                } else {
                    values.iter().map(|v| format!("/{}", v)).collect()
                };
                let components: Vec<&str> = path[1..].split('/').collect();

                let candidates: Vec<(usize, Vec<(String, String)>, bool)> = model
                    .iter()
                    .filter(|((m, _), _)| *m == mth)
                    .filter_map(|((_, pattern), id)| {
                        let is_static = pattern.iter().all(|s| *s != PatternSeg::Param);
                        model_match(pattern, &components).map(|b| (*id, b, is_static))
                    })
                    .collect();

                match router.dispatch(mth, &path) {
                    Ok(found) => {
                        let got: Vec<(String, String)> = found
                            .params
                            .iter()
                            .map(|(n, v)| (n.to_string(), v.to_string()))
                            .collect();
                        let expected = candidates.iter().find(|(id, _, _)| id == found.handler);
                        let (_, bindings, _) = expected
                            .unwrap_or_else(|| panic!("{} {} matched a foreign route", mth, path));
                        assert_eq!(&got, bindings);
                        if let Some((id, _, _)) = candidates.iter().find(|(_, _, s)| *s) {
                            assert_eq!(id, found.handler, "static route must win for {}", path);
                        }
                    }
                    Err(_) => {
                        assert!(candidates.is_empty(), "{} {} missed {:?}", mth, path, candidates);
                    }
                }
            }
        }
    }
});
