use anyhow::{bail, Context};
use aws_config::BehaviorVersion;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::Client;
use clap::Parser;
use people_core::apigw::body_text;
use people_core::{ApiGatewayProxyResponse, Person};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tokio::time::Instant;

const LOCATIONS: &[&str] = &["Dublin", "Lisbon", "Zagreb", "Oslo", "Porto", "Riga"];

#[derive(Default)]
struct Stats {
    success_count: usize,
    mismatch_count: usize,
    error_count: usize,
    total_latency_ms: f64,
}

enum Outcome {
    Match,
    Mismatch(Person),
}

#[derive(Parser, Debug)]
#[command(name = "smoke-test")]
#[command(about = "Create people through the create function and read them back")]
struct Args {
    /// Create function name or ARN
    create_function: String,

    /// Read function name or ARN
    read_function: String,

    /// Number of create/read round trips
    #[arg(long, default_value = "100")]
    iters: usize,

    /// Number of parallel tasks
    #[arg(long, default_value = "1")]
    threads: usize,

    /// Prefix for generated names, so runs do not overwrite each other
    #[arg(long, default_value = "smoke")]
    name_prefix: String,
}

fn random_person(rng: &mut StdRng, prefix: &str, index: usize) -> Person {
    let suffix: u32 = rng.gen();
    let location = LOCATIONS.choose(rng).copied().unwrap_or("Dublin");
    let age = rng.gen_range(18..=99).to_string();
    Person::new(format!("{prefix}-{index}-{suffix:08x}"), location, age)
}

fn proxy_event(method: &str, path: &str, query: &[(&str, &str)]) -> serde_json::Value {
    let query: serde_json::Map<String, serde_json::Value> = query
        .iter()
        .map(|(key, value)| (key.to_string(), serde_json::Value::from(*value)))
        .collect();

    serde_json::json!({
        "resource": path,
        "path": path,
        "httpMethod": method,
        "queryStringParameters": query,
        "requestContext": {
            "resourcePath": path,
            "httpMethod": method,
            "path": path
        }
    })
}

async fn invoke(
    client: &Client,
    function_name: &str,
    event: &serde_json::Value,
) -> anyhow::Result<ApiGatewayProxyResponse> {
    let response = client
        .invoke()
        .function_name(function_name)
        .payload(Blob::new(serde_json::to_vec(event)?))
        .send()
        .await
        .with_context(|| format!("failed to invoke {function_name}"))?;

    let payload = response
        .payload()
        .map(|b| String::from_utf8_lossy(b.as_ref()).to_string())
        .unwrap_or_else(|| "No response".to_string());

    if response.function_error().is_some() {
        bail!("{function_name} failed: {payload}");
    }

    serde_json::from_str(&payload)
        .with_context(|| format!("unexpected response from {function_name}: {payload}"))
}

async fn round_trip(
    client: &Client,
    args: &Args,
    person: &Person,
) -> anyhow::Result<Outcome> {
    let create = proxy_event(
        "POST",
        "/create",
        &[
            ("name", person.name.as_str()),
            ("location", person.location.as_str()),
            ("age", person.age.as_str()),
        ],
    );
    let created = invoke(client, &args.create_function, &create).await?;
    if created.status_code != 200 {
        bail!("create answered {}", created.status_code);
    }

    let read = proxy_event("GET", "/read", &[("name", person.name.as_str())]);
    let response = invoke(client, &args.read_function, &read).await?;
    let body = body_text(&response).unwrap_or_default();
    let stored: Person = serde_json::from_str(body)
        .with_context(|| format!("read body is not a person: {body}"))?;

    if &stored == person {
        Ok(Outcome::Match)
    } else {
        Ok(Outcome::Mismatch(stored))
    }
}

async fn run_round_trips(
    client: Arc<Client>,
    args: Arc<Args>,
    thread_id: usize,
    start: usize,
    end: usize,
    stats: Arc<Mutex<Stats>>,
) {
    let mut rng = StdRng::from_entropy();

    for i in start..=end {
        let person = random_person(&mut rng, &args.name_prefix, i);
        let started = Instant::now();
        let result = round_trip(&client, &args, &person).await;
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        let mut stats = stats.lock().await;
        match result {
            Ok(Outcome::Match) => {
                stats.success_count += 1;
                stats.total_latency_ms += latency_ms;
                println!(
                    "[Thread {}: {}/{}] {} round-tripped in {:.3}ms",
                    thread_id, i, args.iters, person.name, latency_ms
                );
            }
            Ok(Outcome::Mismatch(stored)) => {
                stats.mismatch_count += 1;
                eprintln!(
                    "[Thread {}: {}/{}] wrote {:?} but read {:?}",
                    thread_id, i, args.iters, person, stored
                );
            }
            Err(e) => {
                stats.error_count += 1;
                eprintln!(
                    "[Thread {}: {}/{}] Error for {}: {:#}",
                    thread_id, i, args.iters, person.name, e
                );
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.threads == 0 {
        bail!("--threads must be at least 1");
    }

    println!(
        "Running {} round trips across {} thread(s)",
        args.iters, args.threads
    );

    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let client = Arc::new(Client::new(&config));
    let stats = Arc::new(Mutex::new(Stats::default()));

    let iters_per_thread = args.iters / args.threads;
    let remainder = args.iters % args.threads;
    let threads = args.threads;
    let args = Arc::new(args);

    let mut tasks = JoinSet::new();
    let mut start = 1;
    for t in 1..=threads {
        let count = if t == threads {
            iters_per_thread + remainder
        } else {
            iters_per_thread
        };
        if count == 0 {
            continue;
        }
        let end = start + count - 1;

        let client = Arc::clone(&client);
        let args = Arc::clone(&args);
        let stats = Arc::clone(&stats);
        tasks.spawn(async move {
            run_round_trips(client, args, t, start, end, stats).await;
        });

        start = end + 1;
    }

    while let Some(result) = tasks.join_next().await {
        if let Err(e) = result {
            eprintln!("Task failed: {}", e);
        }
    }

    let stats = stats.lock().await;
    println!("Completed {} round trips", args.iters);
    println!();
    println!("Results:");
    println!("  Success:    {}", stats.success_count);
    println!("  Mismatched: {}", stats.mismatch_count);
    println!("  Errors:     {}", stats.error_count);
    if stats.success_count > 0 {
        let avg_latency = stats.total_latency_ms / stats.success_count as f64;
        println!("  Avg latency: {:.3}ms", avg_latency);
    }

    if stats.mismatch_count > 0 || stats.error_count > 0 {
        bail!("round trip check failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_event_serializes_like_api_gateway() {
        let value = proxy_event("GET", "/read", &[("name", "a")]);

        assert_eq!(value["httpMethod"], "GET");
        assert_eq!(value["path"], "/read");
        assert_eq!(value["queryStringParameters"]["name"], "a");
    }

    #[test]
    fn read_response_payload_decodes_back_to_a_person() {
        let person = Person::new("a", "b", "30");
        let response = people_core::apigw::ok_json(&person).unwrap();
        let payload = serde_json::to_string(&response).unwrap();

        let response: ApiGatewayProxyResponse = serde_json::from_str(&payload).unwrap();
        let stored: Person = serde_json::from_str(body_text(&response).unwrap()).unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(stored, person);
    }

    #[test]
    fn generated_people_use_the_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        let person = random_person(&mut rng, "run1", 3);

        assert!(person.name.starts_with("run1-3-"));
        assert!(LOCATIONS.contains(&person.location.as_str()));
        let age: u32 = person.age.parse().unwrap();
        assert!((18..=99).contains(&age));
    }
}
