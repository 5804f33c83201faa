pub mod scoring_run;
