use std::{fs, path::PathBuf};

/// Temporary test file that is automatically cleaned up on drop.
pub struct TestFile {
    path: PathBuf,
}

impl TestFile {
    /// Create a test file path named after the test; nothing is written yet.
    pub fn new(test_name: &str, ext: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "readscreen_test_{}_{}.{}",
            test_name,
            std::process::id(),
            ext
        ));
        Self { path }
    }

    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }

    /// Write a FASTQ file with one record per sequence, constant quality.
    pub fn write_fastq<S: AsRef<str>>(&self, seqs: &[S]) {
        let mut out = String::new();
        for (i, seq) in seqs.iter().enumerate() {
            let seq = seq.as_ref();
            out.push_str(&format!(
                "@read{}\n{}\n+\n{}\n",
                i,
                seq,
                "I".repeat(seq.len())
            ));
        }
        fs::write(&self.path, out).expect("Failed to write test FASTQ");
    }

    /// Write a FASTA file with one record per sequence.
    #[allow(dead_code)]
    pub fn write_fasta<S: AsRef<str>>(&self, seqs: &[S]) {
        let mut out = String::new();
        for (i, seq) in seqs.iter().enumerate() {
            out.push_str(&format!(">read{}\n{}\n", i, seq.as_ref()));
        }
        fs::write(&self.path, out).expect("Failed to write test FASTA");
    }

    #[allow(dead_code)]
    pub fn write_bytes(&self, bytes: &[u8]) {
        fs::write(&self.path, bytes).expect("Failed to write test bytes");
    }
}

impl Drop for TestFile {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Deterministic DNA sequence for test fixtures. Sequences generated with
/// different prefixes are guaranteed disjoint as exact strings.
pub fn dna_seq(index: usize, prefix: &str) -> String {
    const BASES: [char; 4] = ['A', 'C', 'G', 'T'];
    let mut body = String::new();
    let mut n = index;
    for _ in 0..12 {
        body.push(BASES[n % 4]);
        n /= 4;
    }
    format!("{prefix}{body}")
}
