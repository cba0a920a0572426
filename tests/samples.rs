use std::collections::BTreeSet;

use gensequence::*;

fn fibonacci() -> Sequence<u64> {
    let (mut a, mut b) = (0u64, 1u64);
    sequence_from_cursor(std::iter::from_fn(move || {
        let next = b;
        (a, b) = (b, a + b);
        Some(next)
    }))
}

fn fib(n: usize) -> Vec<u64> {
    fibonacci().take(n).to_vec()
}

const TEXT: &str = "Some long bit of text with many words, duplicate words...";

fn match_words(text: &str) -> Sequence<String> {
    sequence_from_pattern(r"\w+", text)
        .unwrap()
        .map(|m| m.as_str().to_owned())
}

fn unique_in_order(words: &Sequence<String>) -> Sequence<String> {
    words.reduce_to_sequence(
        |mut seen: Vec<String>, word, _| {
            if !seen.contains(&word) {
                seen.push(word);
            }
            seen
        },
        Vec::new(),
    )
}

#[test]
fn first_five_fibonacci_numbers() {
    assert_eq!(fib(5), vec![1, 1, 2, 3, 5]);
    assert_eq!(fib(5), vec![1, 1, 2, 3, 5]);
}

#[test]
fn set_of_words() {
    let words = unique_in_order(&match_words(TEXT));

    assert_eq!(
        words.to_vec(),
        vec!["Some", "long", "bit", "of", "text", "with", "many", "words", "duplicate"]
    );
    assert_eq!(
        words.collect::<BTreeSet<_>>().into_iter().collect::<Vec<_>>(),
        vec!["Some", "bit", "duplicate", "long", "many", "of", "text", "with", "words"]
    );

    let four_letter_words = words.filter(|w| w.len() == 4);
    assert_eq!(four_letter_words.to_vec(), vec!["Some", "long", "text", "with", "many"]);
}

#[test]
fn builder_over_a_composed_pipe() {
    let b = builder::pipe(pipe!(
        operators::map(|a: u32| a),
        operators::map(|a: u32| format!("{:x}", a)),
    ));
    let v = vec![1u32, 2, 3, 4, 10];

    assert_eq!(b.build(v.clone()).to_vec(), v.iter().map(|a| format!("{:x}", a)).collect::<Vec<_>>());
}

#[test]
fn operators_and_sequence_methods_agree() {
    let values = vec![1, 2, 3, 4, 5, 6];
    let chained = sequence(values.clone()).pipe(pipe!(
        operators::filter(|x: &i32| x % 2 == 0),
        operators::map(|x: i32| x * 10),
        operators::scan(|acc: i32, x: i32, _| acc + x, None),
    ));
    let fluent = sequence(values)
        .filter(|x| x % 2 == 0)
        .map(|x| x * 10)
        .scan(|acc, x, _| acc + x, None);

    assert_eq!(chained.to_vec(), fluent.to_vec());
    assert_eq!(fluent.to_vec(), vec![20, 60, 120]);
}

#[tokio::test]
async fn async_sequences_reduce_in_order() {
    let seq = async_sequence(vec!["a", "b", "c"]);
    let joined = seq
        .fold_async(|acc: String, s, i| async move { format!("{acc}{i}{s}") }, futures::future::ready(String::new()))
        .await;

    assert_eq!(joined, "0a1b2c");
}
