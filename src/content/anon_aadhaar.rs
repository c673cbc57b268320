use crate::core::surface::Surface;

pub fn render(out: &mut dyn Surface) {
    out.title("🔐 Anon Aadhaar - Anonymous Identity Verification");
    out.image("Assets/anon-aadhar/intro.png", Some("Anon Aadhar"));

    out.heading("🚀 What is Anon Aadhaar?");
    out.markdown(
        r#"**Anon Aadhaar** is a groundbreaking zero-knowledge protocol developed by the Privacy and Scaling Explorations team at the Ethereum Foundation.
This innovative technology empowers Indian citizens with Aadhaar cards to verify their identity in a completely privacy-preserving manner.
No sensitive information is exposed during the verification process, making Anon Aadhaar a powerful tool in the fight for privacy in the digital age."#,
    );

    out.image("Assets/anon-aadhar/works1.png", Some("Working Procedure"));
    out.heading("🔍 How Anon Aadhaar Works");
    out.markdown(
        r#"Anon Aadhaar leverages advanced cryptographic techniques, particularly zk-SNARKs (Zero-Knowledge Succinct Non-Interactive Arguments of Knowledge), to ensure that users can prove their identity without revealing any underlying personal data.

- **Aadhaar Secure QR Code:** The foundation of this process lies in the Aadhaar Secure QR code, which encapsulates essential identity data. This QR code is signed by the Unique Identification Authority of India (UIDAI) and contains a SHA-256 hash and an RSA signature.
- **Zero-Knowledge Proof Generation:** The core of Anon Aadhaar's privacy-preserving magic happens here. The protocol uses zk-SNARKs to create a proof that validates the correctness of the hash and RSA signature without ever exposing the actual data. This ensures that the identity verification is both secure and private.
- **Circuit Implementation:** The underlying cryptographic circuit is designed to process and verify the Aadhaar data. It ensures that the user's identity can be authenticated without directly revealing personal details like name, address, or contact information."#,
    );

    out.image("Assets/anon-aadhar/works2.png", Some("Mechanism"));
    out.heading("🌟 Key Features of Anon Aadhaar");
    out.markdown(
        r#"Anon Aadhaar offers a robust set of features designed to protect user privacy while ensuring secure and verifiable identity authentication:

- **User Nullifier:** A unique identifier that prevents proof double-spending and enables revocation of user access, ensuring enhanced privacy and control.
- **Timestamp:** The UNIX UTC timestamp acts as a TOTP (Time-based One-Time Password) system, verifying the proof's recency, adding an extra layer of security.
- **Public Key Hash:** Ensures that the signer's public key matches the official public key registered with UIDAI, providing an additional verification step.
- **Signal Hash:** Allows users to transmit a unique signal alongside their Aadhaar identity, which can be utilized for various purposes, such as preventing front-running in blockchain transactions."#,
    );

    out.image("Assets/anon-aadhar/install.png", Some("Integration"));
    out.heading("🛠️ Integrating Anon Aadhaar");
    out.markdown(
        r#"nextPay offers a comprehensive set of tools for developers to integrate Anon Aadhaar into their applications. Our SDKs and libraries make it straightforward to implement anonymous identity verification:

- **TypeScript SDK**: Easily integrate Anon Aadhaar into your JavaScript applications.
- **Solidity Library**: Leverage the power of Anon Aadhaar in your smart contracts on the Ethereum blockchain.
- **React Library**: Implement seamless identity verification in your React-based front-end applications.

Developers can utilize these tools to provide their users with a privacy-first identity verification process that is secure, reliable, and decentralized."#,
    );

    out.image("Assets/anon-aadhar/onchain.png", Some("Offchain"));
    out.image("Assets/anon-aadhar/offchain.png", Some("Onchain"));
    out.heading("🔗 Verifying Proofs");
    out.markdown(
        r#"Anon Aadhaar proofs can be verified both off-chain and on-chain, depending on your application's needs:

- **Off-Chain Verification**: Use the `verify()` method from the SDK to validate proofs off-chain, ensuring quick and efficient verification without the need for blockchain interaction.
- **On-Chain Verification**: For decentralized applications, you can import the `AnonAadhaar.sol` verifier contract into your Hardhat project. This enables secure on-chain verification, with features like user nullifiers to prevent misuse and signal hashes to protect against front-running."#,
    );

    out.heading("💡 Potential Use Cases");
    out.markdown(
        r#"Anon Aadhaar's versatile protocol can be utilized in a wide range of decentralized applications (dApps), including but not limited to:

- **Aadhaar-Based Quadratic Funding/Voting**: Enable fair and anonymous voting processes in decentralized platforms.
- **Gitcoin Passport Integration**: Strengthen identity verification in decentralized funding platforms like Gitcoin.
- **Decentralized Check-In Systems**: Use Anon Aadhaar for secure and private check-ins at events or locations.
- **Micro-Loan Approval Platforms**: Provide anonymous yet verifiable identity for loan approvals in DeFi.
- **On-Chain Voting and Polling**: Secure, private, and verifiable voting systems on blockchain platforms.
- **Decentralized Identity Management**: Empower users to control and manage their identities across multiple dApps without compromising privacy."#,
    );

    out.heading("👨‍💻 For Developers: Deep Dive into Anon Aadhaar's Technical Architecture");
    out.markdown(
        r#"**How Anon Aadhaar Works Behind the Scenes**:

Anon Aadhaar's technical architecture is built around the principles of zero-knowledge proofs, ensuring that identity verification is both secure and private. Here's a closer look at how it functions:

- **Circuit Design and Implementation**: The heart of Anon Aadhaar is its cryptographic circuit, implemented using Circom Groth16. This circuit processes the user's Aadhaar data, generating a zero-knowledge proof that can be verified without exposing sensitive information. The succinctness and correctness of this circuit are crucial for efficient on-chain verification.

- **zk-SNARKs Integration**: The protocol leverages zk-SNARKs to generate proofs that are both small in size and quick to verify, making them ideal for on-chain use. This integration ensures that the verification process is secure, scalable, and does not burden the blockchain with excessive data.

- **Proof Verification**: Developers can choose between off-chain and on-chain verification methods. Off-chain verification is ideal for applications where speed is critical, while on-chain verification is essential for decentralized applications that require transparent and trustless verification.

- **Security Considerations**: The use of a public key hash and a signal hash ensures that each transaction or interaction is unique and verifiable. These features protect against common blockchain vulnerabilities such as front-running, while the user nullifier prevents double-spending of proofs.

**Customization and Integration**:

- **Flexible SDKs**: The Anon Aadhaar SDKs are designed to be modular, allowing developers to pick and choose the components that best fit their application's needs.
- **Advanced Use Cases**: Anon Aadhaar can be adapted for a variety of advanced use cases, from integrating with ERC-4337 wallets to creating entirely new decentralized identity management systems.

By integrating Anon Aadhaar into your dApps, you're not just adopting a new technology—you're embracing a future where privacy and security are foundational to digital interactions."#,
    );
}
