//! Single-processor CPU scheduling simulator.
//!
//! Simulates four classical policies (FCFS, non-preemptive SJF, Round
//! Robin and non-preemptive Priority) over a list of processes and
//! produces a Gantt timeline plus per-process and aggregate metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ScheduleBlock`, `Slot`,
//!   `ProcessResult`, `SimulationResult`
//! - **`dispatching`**: Selection rules (FIFO, SJF, PRIORITY) and the rule engine
//! - **`scheduler`**: The four policies, the `CpuScheduler` trait and KPIs
//! - **`validation`**: Input checks run before a simulation
//! - **`request`**: Serde-friendly request that validates, then simulates
//! - **`comparison`**: All policies on one input, ranked
//! - **`playback`**: Step-wise reveal of a computed timeline
//! - **`workload`**: Seeded random process lists
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler;
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 8),
//!     Process::new(4, 3, 2),
//! ];
//! let result = scheduler::round_robin(&processes, 2);
//! assert_eq!(result.makespan(), 18);
//! assert!((result.avg_waiting_time - 7.25).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod comparison;
pub mod dispatching;
pub mod models;
pub mod playback;
pub mod request;
pub mod scheduler;
pub mod validation;
pub mod workload;
