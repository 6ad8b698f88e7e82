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

use crate::{aggregate, Outcome};
use parking_lot::Mutex;

type Single = Outcome<i32, Vec<&'static str>>;
type Accumulated = Outcome<Vec<i32>, Vec<&'static str>>;

fn ok(n: i32) -> Single {
    Outcome::Success(n)
}

fn fail(errs: &[&'static str]) -> Single {
    Outcome::Failure(errs.to_vec())
}

#[test]
fn to_failure_of_success_is_empty() {
    assert_eq!(ok(1).to_failure(), Outcome::Failure(vec![]));
    assert_eq!(fail(&["a"]).to_failure(), fail(&["a"]));
}

#[test]
fn merge_two_successes() {
    let acc: Accumulated = Outcome::Success(vec![1, 2]);
    assert_eq!(acc.merge(ok(3)), Outcome::Success(vec![1, 2, 3]));
}

#[test]
fn merge_keeps_all_failures() {
    let acc: Accumulated = Outcome::Failure(vec!["a"]);
    assert_eq!(acc.merge(fail(&["b", "c"])), Outcome::Failure(vec!["a", "b", "c"]));

    let acc: Accumulated = Outcome::Failure(vec!["a"]);
    assert_eq!(acc.merge(ok(1)), Outcome::Failure(vec!["a"]));

    let acc: Accumulated = Outcome::Success(vec![1, 2]);
    assert_eq!(acc.merge(fail(&["b"])), Outcome::Failure(vec!["b"]));
}

#[test]
fn aggregate_empty() {
    let result: Accumulated = aggregate(vec![]);
    assert_eq!(result, Outcome::Success(vec![]));
}

#[test]
fn aggregate_all_successes() {
    assert_eq!(
        aggregate(vec![ok(1), ok(2), ok(3)]),
        Outcome::Success(vec![1, 2, 3])
    );
}

#[test]
fn aggregate_concatenates_failures_in_order() {
    let result = aggregate(vec![ok(1), fail(&["e1"]), ok(3), fail(&["e2", "e3"])]);
    assert_eq!(result, Outcome::Failure(vec!["e1", "e2", "e3"]));
}

#[test]
fn aggregate_visits_every_element() {
    let visited = Mutex::new(vec![]);
    let outcomes = (0..5).map(|i| {
        visited.lock().push(i);
        if i % 2 == 0 {
            fail(&["even"])
        } else {
            ok(i)
        }
    });
    let result = aggregate(outcomes);
    assert_eq!(result, Outcome::Failure(vec!["even", "even", "even"]));
    assert_eq!(*visited.lock(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn collect_aggregates() {
    let result: Accumulated = vec![ok(4), ok(5)].into_iter().collect();
    assert_eq!(result, Outcome::Success(vec![4, 5]));

    let result: Accumulated = vec![fail(&["x"]), ok(5), fail(&["y"])]
        .into_iter()
        .collect();
    assert_eq!(result, Outcome::Failure(vec!["x", "y"]));
}

#[test]
fn accumulating_lifts_scalar_failures() {
    let outcomes: Vec<Outcome<i32, &'static str>> =
        vec![Outcome::Success(1), Outcome::Failure("a"), Outcome::Failure("b")];
    let result = aggregate(outcomes.into_iter().map(Outcome::accumulating));
    assert_eq!(result, Outcome::Failure(vec!["a", "b"]));
}
