//! # gradlite-train
//!
//! Fits a small tanh MLP to a fixed four-sample regression set with SGD,
//! using nothing but scalar autograd. Settings come from `GRADLITE_*`
//! environment variables (see `gradlite::config`).
//!
//! Each step: zero grads → forward every sample → loss → backward → SGD update.
//! The learning rate decays linearly to zero over the run.

use gradlite::autograd::Scalar;
use gradlite::config::{self, TrainConfig};
use gradlite::nn::{Activation, Loss, Mlp, Module, Mse};
use gradlite::optim::{Optimizer, Sgd};
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

/// Inputs of the toy dataset (three features each).
const INPUTS: [[f64; 3]; 4] = [
    [2.0, 3.0, -1.0],
    [3.0, -1.0, 0.5],
    [0.5, 1.0, 1.0],
    [1.0, 1.0, -1.0],
];
/// Targets of the toy dataset.
const TARGETS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

/// Errors that abort a training run.
#[derive(Debug, Error)]
enum TrainError {
    /// The loss stopped being a finite number (NaN or infinity).
    #[error("loss became non-finite ({loss}) at step {step}")]
    Diverged { step: usize, loss: f64 },
}

/// Outcome of a finished run.
struct TrainReport {
    first_loss: f64,
    final_loss: f64,
    predictions: Vec<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::from_env()?;
    config.validate()?;
    let report = train(&config)?;

    println!("\n--- predictions ---");
    for (pred, target) in report.predictions.iter().zip(TARGETS) {
        println!("target {target:5.2} | predicted {pred:8.4}");
    }
    println!("loss {:.4} -> {:.4}", report.first_loss, report.final_loss);
    Ok(())
}

/// Runs the training loop described by `config`. Prints progress to stdout.
fn train(config: &TrainConfig) -> Result<TrainReport, Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let hidden = config.hidden_size;
    let model = Mlp::new(
        INPUTS[0].len(),
        &[hidden, hidden, 1],
        Activation::Tanh,
        &mut rng,
    )?;
    let mut optimizer = Sgd::new(model.parameters(), config.learning_rate);
    let loss_fn = Mse::new(config.reduction);

    println!("num samples: {}", INPUTS.len());
    println!("layers: {}", describe_layers(&model));
    println!("num params: {}", model.num_parameters());
    println!("loss reduction: {}", config.reduction);

    let targets: Vec<Scalar> = TARGETS.iter().copied().map(Scalar::new).collect();
    let mut first_loss = f64::NAN;
    let mut final_loss = f64::NAN;

    for step in 0..config.num_steps {
        optimizer.zero_grad();
        let predictions = predict(&model);
        let loss = loss_fn.loss(&predictions, &targets);
        let loss_val = loss.value();
        if !loss_val.is_finite() {
            eprintln!("step {:4}: loss is {loss_val}, stopping", step + 1);
            return Err(TrainError::Diverged {
                step: step + 1,
                loss: loss_val,
            }
            .into());
        }
        loss.backward();
        let lr_t = config.learning_rate * (1.0 - step as f64 / config.num_steps as f64);
        optimizer.set_learning_rate(lr_t);
        optimizer.step();

        if step == 0 {
            first_loss = loss_val;
        }
        final_loss = loss_val;
        if (step + 1) % config.loss_log_every == 0 || step == 0 {
            println!(
                "step {:4} / {:4} | loss {:.4}",
                step + 1,
                config.num_steps,
                loss_val
            );
        }
    }

    let predictions = predict(&model).iter().map(Scalar::value).collect();
    Ok(TrainReport {
        first_loss,
        final_loss,
        predictions,
    })
}

/// Layer widths from input to output, e.g. `3 -> 4 -> 4 -> 1`.
fn describe_layers(model: &Mlp) -> String {
    let mut widths: Vec<String> = model
        .layers()
        .first()
        .map(|l| l.input_features().to_string())
        .into_iter()
        .collect();
    widths.extend(model.layers().iter().map(|l| l.output_features().to_string()));
    widths.join(" -> ")
}

/// One forward pass per sample; returns the single output of each.
fn predict(model: &Mlp) -> Vec<Scalar> {
    INPUTS
        .iter()
        .map(|row| {
            let x: Vec<Scalar> = row.iter().copied().map(Scalar::new).collect();
            model.forward(&x).remove(0)
        })
        .collect()
}
