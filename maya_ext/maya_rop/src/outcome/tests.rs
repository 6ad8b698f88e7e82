// Copyright 2015-2023 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{ArgumentError, Outcome};
use parking_lot::Mutex;

type Out = Outcome<i32, String>;

fn ok(n: i32) -> Out {
    Outcome::succeeded(n)
}

fn err(msg: &str) -> Out {
    Outcome::failed(msg.to_string())
}

#[test]
fn factories_and_accessors() {
    let success = ok(7);
    assert!(success.is_success());
    assert!(!success.is_failure());
    assert_eq!(success.success(), Some(&7));
    assert_eq!(success.failure(), None);
    assert_eq!(success.into_success(), Some(7));

    let failure = err("boom");
    assert!(failure.is_failure());
    assert!(!failure.is_success());
    assert_eq!(failure.failure().map(String::as_str), Some("boom"));
    assert_eq!(failure.success(), None);
    assert_eq!(failure.into_failure(), Some("boom".to_string()));
}

#[test]
fn try_factories_reject_absent_values() {
    assert_eq!(Out::try_succeeded(Some(1)), Ok(ok(1)));
    assert_eq!(Out::try_failed(Some("e".to_string())), Ok(err("e")));
    assert_eq!(
        Out::try_succeeded(None),
        Err(ArgumentError::Absent { name: "success" })
    );
    assert_eq!(
        Out::try_failed(None),
        Err(ArgumentError::Absent { name: "failure" })
    );
}

#[test]
fn map_preserves_variant() {
    assert_eq!(ok(2).map(|n| n * 10), ok(20));
    assert_eq!(err("e").map(|n| n * 10), err("e"));
    assert!(ok(1).map(|n| n.to_string()).is_success());
}

#[test]
fn map_composes() {
    let f = |n: i32| n + 1;
    let g = |n: i32| n * 3;
    for o in [ok(4), err("e")] {
        assert_eq!(o.clone().map(f).map(g), o.map(|n| g(f(n))));
    }
}

#[test]
fn map_failure_leaves_success() {
    assert_eq!(ok(1).map_failure(|e| e.len()), Outcome::Success(1));
    assert_eq!(err("four").map_failure(|e| e.len()), Outcome::Failure(4));
}

#[test]
fn bind_identities() {
    assert_eq!(ok(5).bind(Outcome::succeeded), ok(5));
    assert_eq!(err("e").bind(Outcome::succeeded), err("e"));

    let halve = |n: i32| {
        if n % 2 == 0 {
            ok(n / 2)
        } else {
            err("odd")
        }
    };
    assert_eq!(ok(8).bind(halve).bind(halve), ok(2));
    assert_eq!(ok(6).bind(halve).bind(halve), err("odd"));
}

#[test]
fn bind_skips_on_failure() {
    let calls = Mutex::new(0);
    let result = err("e").bind(|n| {
        *calls.lock() += 1;
        ok(n)
    });
    assert_eq!(result, err("e"));
    assert_eq!(*calls.lock(), 0);
}

#[test]
fn either_selects_one_branch() {
    let on_success = |n: i32| Outcome::<String, usize>::succeeded(n.to_string());
    let on_failure = |e: String| Outcome::<String, usize>::failed(e.len());

    assert_eq!(
        ok(12).either(on_success, on_failure),
        Outcome::Success("12".to_string())
    );
    assert_eq!(err("abc").either(on_success, on_failure), Outcome::Failure(3));
}

#[test]
fn tee_runs_once_on_success() {
    let seen = Mutex::new(vec![]);
    let result = ok(3).tee(|n| seen.lock().push(*n));
    assert_eq!(result, ok(3));
    assert_eq!(*seen.lock(), vec![3]);

    let result = err("e").tee(|n| seen.lock().push(*n));
    assert_eq!(result, err("e"));
    assert_eq!(*seen.lock(), vec![3]);
}

#[test]
fn tee_failure_runs_once_on_failure() {
    let seen = Mutex::new(vec![]);
    assert_eq!(ok(3).tee_failure(|e| seen.lock().push(e.clone())), ok(3));
    assert_eq!(err("e").tee_failure(|e| seen.lock().push(e.clone())), err("e"));
    assert_eq!(*seen.lock(), vec!["e".to_string()]);
}

#[test]
fn handle_invokes_matching_branch() {
    let log = Mutex::new(vec![]);

    ok(1).handle(
        |n| log.lock().push(format!("success {}", n)),
        |e| log.lock().push(format!("failure {}", e)),
    );
    err("e").handle(
        |n| log.lock().push(format!("success {}", n)),
        |e| log.lock().push(format!("failure {}", e)),
    );

    assert_eq!(*log.lock(), vec!["success 1", "failure e"]);
}

#[test]
fn match_success_and_failure() {
    let log = Mutex::new(vec![]);

    ok(1).match_success(|n| log.lock().push(n));
    err("e").match_success(|n| log.lock().push(n));
    ok(2).match_failure(|_| log.lock().push(-1));
    err("e").match_failure(|_| log.lock().push(-2));

    assert_eq!(*log.lock(), vec![1, -2]);
}

#[test]
fn value_or_alternative() {
    assert_eq!(ok(1).value_or(0), 1);
    assert_eq!(err("e").value_or(0), 0);
}

#[test]
fn result_conversions() {
    let from_ok: Out = Ok(1).into();
    assert_eq!(from_ok, ok(1));
    let from_err: Out = Err("e".to_string()).into();
    assert_eq!(from_err, err("e"));

    assert_eq!(ok(1).into_result(), Ok(1));
    assert_eq!(err("e").into_result(), Err("e".to_string()));
}

#[test]
fn as_ref_borrows() {
    let o = err("e");
    assert_eq!(o.as_ref().map(|n| *n), Outcome::Failure(&"e".to_string()));
    assert_eq!(ok(4).as_ref(), Outcome::Success(&4));
}
