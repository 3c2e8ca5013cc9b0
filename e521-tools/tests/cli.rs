//! End-to-end tests of the command-line surface, invoked with the
//! documented single-dash flag spellings.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn e521_tools() -> Command {
    Command::cargo_bin("e521-tools").expect("binary builds")
}

#[test]
fn khash_hashes_stdin_with_sha3_512_by_default() {
    e521_tools()
        .arg("khash")
        .write_stdin("abc")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e",
        ));
}

#[test]
fn khash_spec_flags_compute_sha3_256_of_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("msg.bin");
    let digest = dir.path().join("digest.bin");
    fs::write(&input, b"abc").unwrap();

    let expected = "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532";
    e521_tools()
        .args(["khash", "-op", "SHA3", "-l", "256"])
        .args(["-f", input.to_str().unwrap()])
        .args(["-w", digest.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));

    assert_eq!(fs::read(&digest).unwrap(), hex::decode(expected).unwrap());
}

#[test]
fn khash_reproduces_the_kmacxof256_sample_vector() {
    let dir = tempfile::tempdir().unwrap();
    let key = dir.path().join("key.bin");
    let msg = dir.path().join("msg.bin");
    fs::write(&key, (0x40u8..=0x5f).collect::<Vec<u8>>()).unwrap();
    fs::write(&msg, [0x00u8, 0x01, 0x02, 0x03]).unwrap();

    e521_tools()
        .args(["khash", "-op", "KMACXOF256", "-l", "512"])
        .args(["-k", key.to_str().unwrap()])
        .args(["-f", msg.to_str().unwrap()])
        .args(["-cs", "My Tagged Application"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1755133f1534752aad0748f2c706fb5c784512cab835cd15676b16c0c6647fa9",
        ));
}

#[test]
fn khash_rejects_an_invalid_sha3_length() {
    e521_tools()
        .args(["khash", "-op", "SHA3", "-l", "100"])
        .write_stdin("abc")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn khash_requires_a_key_file_for_kmac() {
    e521_tools()
        .args(["khash", "-op", "KMACXOF256"])
        .write_stdin("abc")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("key file"));
}

#[test]
fn kcipher_round_trips_with_spec_flags() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.bin");
    let encrypted = dir.path().join("enc.bin");
    let decrypted = dir.path().join("dec.bin");
    fs::write(&input, b"attack at dawn").unwrap();

    e521_tools()
        .args(["kcipher", "-e"])
        .args(["-f", input.to_str().unwrap()])
        .args(["-pws", "secret"])
        .args(["-o", encrypted.to_str().unwrap()])
        .assert()
        .success();

    // nonce (64) + ciphertext + tag (64)
    assert_eq!(fs::read(&encrypted).unwrap().len(), 64 + 14 + 64);

    e521_tools()
        .args(["kcipher", "-d"])
        .args(["-f", encrypted.to_str().unwrap()])
        .args(["-pws", "secret"])
        .args(["-o", decrypted.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("authentication tag valid"));

    assert_eq!(fs::read(&decrypted).unwrap(), b"attack at dawn");
}

#[test]
fn kcipher_refuses_a_tampered_record_unless_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.bin");
    let encrypted = dir.path().join("enc.bin");
    let decrypted = dir.path().join("dec.bin");
    fs::write(&input, b"integrity matters").unwrap();

    e521_tools()
        .args(["kcipher", "-e"])
        .args(["-f", input.to_str().unwrap()])
        .args(["-pws", "secret"])
        .args(["-o", encrypted.to_str().unwrap()])
        .assert()
        .success();

    // Flip a ciphertext byte.
    let mut record = fs::read(&encrypted).unwrap();
    record[64] ^= 0x01;
    fs::write(&encrypted, &record).unwrap();

    e521_tools()
        .args(["kcipher", "-d"])
        .args(["-f", encrypted.to_str().unwrap()])
        .args(["-pws", "secret"])
        .args(["-o", decrypted.to_str().unwrap()])
        .assert()
        .failure()
        .code(1);
    assert!(!decrypted.exists(), "nothing may be written on tag mismatch");

    e521_tools()
        .args(["kcipher", "-d", "-i"])
        .args(["-f", encrypted.to_str().unwrap()])
        .args(["-pws", "secret"])
        .args(["-o", decrypted.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("INVALID"));
    assert!(decrypted.exists());
}

#[test]
fn kcipher_requires_exactly_one_password_source() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.bin");
    fs::write(&input, b"x").unwrap();

    e521_tools()
        .args(["kcipher", "-e"])
        .args(["-f", input.to_str().unwrap()])
        .args(["-pws", "one", "-pwf", input.to_str().unwrap()])
        .args(["-o", dir.path().join("out.bin").to_str().unwrap()])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn ecutils_end_to_end_with_spec_flags() {
    let dir = tempfile::tempdir().unwrap();
    let pub_path = dir.path().join("test.pub");
    let prv_path = dir.path().join("test.prv");
    let msg_path = dir.path().join("msg.bin");
    let sig_path = dir.path().join("msg.sig");
    let enc_path = dir.path().join("msg.enc");
    let dec_path = dir.path().join("msg.dec");
    fs::write(&msg_path, [0xffu8; 100]).unwrap();

    e521_tools()
        .args(["ecutils", "-op", "keygen"])
        .args(["-pub", pub_path.to_str().unwrap()])
        .args(["-prv", prv_path.to_str().unwrap()])
        .args(["-pwd", "TestPassword"])
        .assert()
        .success();
    assert_eq!(fs::read(&pub_path).unwrap().len(), 132);

    // Sign with the stored (encrypted) private key, then verify.
    e521_tools()
        .args(["ecutils", "-op", "sign"])
        .args(["-prv", prv_path.to_str().unwrap()])
        .args(["-rpwd", "TestPassword"])
        .args(["-f", msg_path.to_str().unwrap()])
        .args(["-o", sig_path.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(fs::read(&sig_path).unwrap().len(), 129);

    e521_tools()
        .args(["ecutils", "-op", "verify"])
        .args(["-pub", pub_path.to_str().unwrap()])
        .args(["-s", sig_path.to_str().unwrap()])
        .args(["-f", msg_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("signature OK"));

    // A mutated signature no longer verifies.
    let mut sig = fs::read(&sig_path).unwrap();
    sig[40] ^= 0x08;
    fs::write(&sig_path, &sig).unwrap();
    e521_tools()
        .args(["ecutils", "-op", "verify"])
        .args(["-pub", pub_path.to_str().unwrap()])
        .args(["-s", sig_path.to_str().unwrap()])
        .args(["-f", msg_path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1);

    // Encrypt under the stored public key, decrypt via the password path.
    e521_tools()
        .args(["ecutils", "-op", "encrypt"])
        .args(["-pub", pub_path.to_str().unwrap()])
        .args(["-f", msg_path.to_str().unwrap()])
        .args(["-o", enc_path.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(fs::read(&enc_path).unwrap().len(), 132 + 100 + 64);

    e521_tools()
        .args(["ecutils", "-op", "decrypt"])
        .args(["-pwd", "TestPassword"])
        .args(["-f", enc_path.to_str().unwrap()])
        .args(["-o", dec_path.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(fs::read(&dec_path).unwrap(), [0xffu8; 100]);
}

#[test]
fn ecutils_enforces_the_required_flag_matrix() {
    let dir = tempfile::tempdir().unwrap();

    // keygen without a private-key path
    e521_tools()
        .args(["ecutils", "-op", "keygen"])
        .args(["-pub", dir.path().join("k.pub").to_str().unwrap()])
        .args(["-pwd", "pw"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--prv"));

    // sign with neither a key file nor a password
    e521_tools()
        .args(["ecutils", "-op", "sign"])
        .args(["-f", dir.path().join("m").to_str().unwrap()])
        .args(["-o", dir.path().join("s").to_str().unwrap()])
        .assert()
        .failure()
        .code(1);

    // a private-key file without its password
    e521_tools()
        .args(["ecutils", "-op", "decrypt"])
        .args(["-prv", dir.path().join("k.prv").to_str().unwrap()])
        .args(["-f", dir.path().join("m").to_str().unwrap()])
        .args(["-o", dir.path().join("d").to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--rpwd"));
}
