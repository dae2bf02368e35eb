//! Sample inputs used by the binary when no files are given.

/// Inbound email asking about termination for cause.
pub const SAMPLE_EMAIL: &str = "Subject: Termination of Services under MSA
Dear Counsel,
We refer to the Master Services Agreement dated 10 March 2023 between Acme
Technologies Pvt. Ltd. (“Acme”) and Brightwave Solutions LLP (“Brightwave”).
Due to ongoing performance issues and repeated delays in delivery, we are considering
termination of the Agreement for cause with effect from 1 December 2025.
Please confirm:
1. Whether we are contractually entitled to terminate for cause on the basis of repeated
delays in delivery;
2. The minimum notice period required.
We would appreciate your advice by 18 November 2025.
Regards,
Priya Sharma
Legal Manager, Acme Technologies Pvt. Ltd.";

/// Excerpt of the termination and notice clauses of the agreement.
pub const CONTRACT_SNIPPET: &str = "Clause 9 – Termination for Cause
9.1 Either Party may terminate this Agreement for cause upon thirty (30) days’ written
notice if the other Party commits a material breach.
9.2 Repeated failure to meet delivery timelines constitutes a material breach.
Clause 10 – Notice
10.1 All notices shall be given in writing and shall be effective upon receipt.
10.2 For termination, minimum thirty (30) days’ prior written notice is required.";
